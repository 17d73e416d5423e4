use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Columns selected whenever a full task row is returned.
pub const TASK_COLUMNS: &str = "id, username, email, text, completed, created_at, updated_at";

/// A task as stored in the `tasks` table and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Surrogate key assigned by SQLite.
    pub id: i64,
    /// Name of the submitter.
    pub username: String,
    /// Contact address of the submitter.
    pub email: String,
    /// The task itself.
    pub text: String,
    /// Set by the administrator.
    pub completed: bool,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update; equal to `created_at` until the first update.
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /tasks`.
///
/// Absent fields deserialize as empty strings so that a missing field and a
/// blank one are rejected with the same message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewTask {
    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub username: String,
    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub email: String,
    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub text: String,
}

/// Body of `PUT /tasks/{id}`. Only the supplied fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "not_blank")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
