//! Page arithmetic and the sort allow-lists used by the task listing.
//!
//! Sort parameters arrive as free-form query strings. They are never
//! interpolated into SQL directly: each one is matched against a fixed set of
//! variants and anything unrecognized falls back to the default.

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Number of tasks on one page.
pub const PAGE_SIZE: i64 = 3;

/// Columns a task listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Username,
    Email,
    #[default]
    CreatedAt,
    Completed,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::CreatedAt,
        SortField::Username,
        SortField::Email,
        SortField::Completed,
    ];

    /// Matches `raw` against the allow-list, falling back to `created_at`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some("username") => SortField::Username,
            Some("email") => SortField::Email,
            Some("created_at") => SortField::CreatedAt,
            Some("completed") => SortField::Completed,
            _ => SortField::default(),
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            SortField::Username => "username",
            SortField::Email => "email",
            SortField::CreatedAt => "created_at",
            SortField::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Case-insensitive match against `ASC`/`DESC`, falling back to `DESC`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
            Some("ASC") => SortOrder::Asc,
            Some("DESC") => SortOrder::Desc,
            _ => SortOrder::default(),
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Raw query string of `GET /tasks`. Every field is kept as text so that bad
/// values degrade to defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    pub page: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

/// A normalized listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: i64,
    #[serde(rename = "sortBy")]
    pub sort_by: SortField,
    #[serde(rename = "sortOrder")]
    pub sort_order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl PageRequest {
    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }

    /// `ORDER BY` clause built only from allow-listed identifiers. Ties are
    /// broken by id in the same direction.
    pub fn order_clause(&self) -> String {
        let keyword = self.sort_order.keyword();
        format!("{} {}, id {}", self.sort_by.column(), keyword, keyword)
    }
}

impl From<TaskListQuery> for PageRequest {
    fn from(query: TaskListQuery) -> Self {
        let page = query
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        Self {
            page,
            sort_by: SortField::parse_or_default(query.sort_by.as_deref()),
            sort_order: SortOrder::parse_or_default(query.sort_order.as_deref()),
        }
    }
}

/// Page metadata returned alongside a page of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: i64,
    pub total: i64,
    pub limit: i64,
    #[serde(rename = "totalItems")]
    pub total_items: i64,
}

impl Pagination {
    /// `current` is echoed as given, even past the last page.
    pub fn new(current: i64, limit: i64, total_items: i64) -> Self {
        let total = if total_items <= 0 {
            0
        } else {
            (total_items + limit - 1) / limit
        };
        Self {
            current,
            total,
            limit,
            total_items,
        }
    }
}

/// Body of `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub pagination: Pagination,
}
