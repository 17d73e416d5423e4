use crate::client::AuthState;

pub const TITLE: &str = "ToDo List";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderView {
    /// Nobody is logged in; offers the login dialog.
    LoggedOut,
    /// Shows who is logged in and offers logout.
    LoggedIn { caption: String },
}

impl HeaderView {
    pub fn from_auth(auth: &AuthState) -> Self {
        match &auth.user {
            Some(user) => HeaderView::LoggedIn {
                caption: format!("{} ({})", user.username, user.role),
            },
            None => HeaderView::LoggedOut,
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            HeaderView::LoggedOut => "Admin Login",
            HeaderView::LoggedIn { .. } => "Logout",
        }
    }
}
