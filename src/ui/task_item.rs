use crate::models::{Task, TaskUpdate};

/// Actions offered next to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemControl {
    ToggleComplete,
    Edit,
}

impl ItemControl {
    pub fn label(self, task: &Task) -> &'static str {
        match self {
            ItemControl::ToggleComplete if task.completed => "Mark Incomplete",
            ItemControl::ToggleComplete => "Mark Complete",
            ItemControl::Edit => "Edit",
        }
    }
}

/// Controls shown next to each task; only administrators get any.
pub fn controls(is_admin: bool) -> Vec<ItemControl> {
    if is_admin {
        vec![ItemControl::ToggleComplete, ItemControl::Edit]
    } else {
        Vec::new()
    }
}

pub fn badge(task: &Task) -> Option<&'static str> {
    task.completed.then_some("Completed")
}

/// The update sent by the toggle control: only the flipped flag.
pub fn toggle(task: &Task, is_admin: bool) -> Option<TaskUpdate> {
    is_admin.then(|| TaskUpdate {
        text: None,
        completed: Some(!task.completed),
    })
}

/// Inline editor for one task's text and completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEditor {
    pub editing: bool,
    pub text: String,
    pub completed: bool,
}

impl TaskEditor {
    pub fn new(task: &Task) -> Self {
        Self {
            editing: false,
            text: task.text.clone(),
            completed: task.completed,
        }
    }

    /// Opens the editor with the task's current values.
    pub fn begin(&mut self, task: &Task) {
        self.editing = true;
        self.text = task.text.clone();
        self.completed = task.completed;
    }

    /// Closes the editor and discards edits.
    pub fn cancel(&mut self, task: &Task) {
        *self = Self::new(task);
    }

    /// Closes the editor and returns the update to send, carrying both fields.
    pub fn save(&mut self) -> TaskUpdate {
        self.editing = false;
        TaskUpdate {
            text: Some(self.text.clone()),
            completed: Some(self.completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(completed: bool) -> Task {
        let now = Utc::now();
        Task {
            id: 7,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            text: "buy milk".to_string(),
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_controls_are_admin_only() {
        assert!(controls(false).is_empty());
        assert_eq!(controls(true), vec![ItemControl::ToggleComplete, ItemControl::Edit]);
    }

    #[test]
    fn test_toggle_flips_flag_only() {
        let update = toggle(&task(false), true).unwrap();
        assert_eq!(update.completed, Some(true));
        assert_eq!(update.text, None);

        assert_eq!(toggle(&task(true), true).unwrap().completed, Some(false));
        assert!(toggle(&task(false), false).is_none());
    }

    #[test]
    fn test_labels_and_badge() {
        assert_eq!(ItemControl::ToggleComplete.label(&task(true)), "Mark Incomplete");
        assert_eq!(ItemControl::ToggleComplete.label(&task(false)), "Mark Complete");
        assert_eq!(badge(&task(true)), Some("Completed"));
        assert_eq!(badge(&task(false)), None);
    }

    #[test]
    fn test_editor_cycle() {
        let task = task(false);
        let mut editor = TaskEditor::new(&task);

        editor.begin(&task);
        editor.text = "buy oat milk".to_string();
        editor.completed = true;
        editor.cancel(&task);
        assert!(!editor.editing);
        assert_eq!(editor.text, "buy milk");

        editor.begin(&task);
        editor.text = "buy oat milk".to_string();
        let update = editor.save();
        assert!(!editor.editing);
        assert_eq!(update.text.as_deref(), Some("buy oat milk"));
        assert_eq!(update.completed, Some(false));
    }
}
