use crate::client::TasksState;
use crate::pagination::{SortField, SortOrder};
use crate::ui::pager::PagerView;

pub const EMPTY_MESSAGE: &str = "No tasks found. Create your first task above!";
pub const LOADING_MESSAGE: &str = "Loading tasks...";

pub fn sort_field_label(field: SortField) -> &'static str {
    match field {
        SortField::CreatedAt => "Date",
        SortField::Username => "Username",
        SortField::Email => "Email",
        SortField::Completed => "Status",
    }
}

pub fn sort_order_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Desc => "Newest first",
        SortOrder::Asc => "Oldest first",
    }
}

/// Options of the two sort selectors, in display order.
pub fn sort_options() -> (Vec<(SortField, &'static str)>, Vec<(SortOrder, &'static str)>) {
    let fields = SortField::ALL
        .iter()
        .map(|field| (*field, sort_field_label(*field)))
        .collect();
    let orders = [SortOrder::Desc, SortOrder::Asc]
        .iter()
        .map(|order| (*order, sort_order_label(*order)))
        .collect();
    (fields, orders)
}

/// What the task list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Loading,
    Empty,
    /// Task ids in display order and the pager, if more than one page exists.
    Tasks {
        ids: Vec<i64>,
        pager: Option<PagerView>,
    },
}

impl ListBody {
    pub fn from_state(state: &TasksState) -> Self {
        if state.is_loading {
            ListBody::Loading
        } else if state.tasks.is_empty() {
            ListBody::Empty
        } else {
            ListBody::Tasks {
                ids: state.tasks.iter().map(|task| task.id).collect(),
                pager: state.pagination.as_ref().and_then(PagerView::new),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::pagination::Pagination;
    use chrono::Utc;

    #[test]
    fn test_sort_options_cover_the_allow_list() {
        let (fields, orders) = sort_options();
        assert_eq!(
            fields.iter().map(|(_, label)| *label).collect::<Vec<_>>(),
            vec!["Date", "Username", "Email", "Status"]
        );
        assert_eq!(orders[0], (SortOrder::Desc, "Newest first"));
        assert_eq!(orders[1], (SortOrder::Asc, "Oldest first"));
    }

    #[test]
    fn test_list_body() {
        let mut state = TasksState::default();
        state.is_loading = true;
        assert_eq!(ListBody::from_state(&state), ListBody::Loading);

        state.is_loading = false;
        assert_eq!(ListBody::from_state(&state), ListBody::Empty);

        let now = Utc::now();
        state.tasks.push(Task {
            id: 3,
            username: "bob".to_string(),
            email: "b@x.com".to_string(),
            text: "walk dog".to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        });
        state.pagination = Some(Pagination::new(1, 3, 1));
        assert_eq!(
            ListBody::from_state(&state),
            ListBody::Tasks {
                ids: vec![3],
                pager: None
            }
        );
    }
}
