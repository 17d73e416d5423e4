use crate::auth::LoginRequest;
use crate::models::NewTask;

/// State of the "Create New Task" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub username: String,
    pub email: String,
    pub text: String,
}

impl TaskForm {
    /// Same rule the server applies: every field non-blank after trimming.
    pub fn is_complete(&self) -> bool {
        [&self.username, &self.email, &self.text]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// The request to send, or `None` while a required field is blank.
    pub fn submission(&self) -> Option<NewTask> {
        self.is_complete().then(|| NewTask {
            username: self.username.clone(),
            email: self.email.clone(),
            text: self.text.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit_label(is_loading: bool) -> &'static str {
        if is_loading {
            "Creating..."
        } else {
            "Create Task"
        }
    }
}

/// State of the admin login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn submission(&self) -> Option<LoginRequest> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return None;
        }
        Some(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TaskForm {
        TaskForm {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            text: "buy milk".to_string(),
        }
    }

    #[test]
    fn test_complete_form_submits() {
        let submission = filled().submission().unwrap();
        assert_eq!(submission.username, "alice");
        assert_eq!(submission.text, "buy milk");
    }

    #[test]
    fn test_blank_fields_block_submission() {
        let mut form = filled();
        form.email = "   ".to_string();
        assert!(!form.is_complete());
        assert!(form.submission().is_none());
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, TaskForm::default());
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let mut form = LoginForm {
            username: "admin".to_string(),
            password: String::new(),
        };
        assert!(form.submission().is_none());

        form.password = "123".to_string();
        assert_eq!(form.submission().unwrap().username, "admin");
    }
}
