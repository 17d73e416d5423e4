//! HTTP client and state store used by a task board front end.

pub mod api;
pub mod store;

pub use api::{ApiClient, ClientError, DEFAULT_API_URL};
pub use store::{AuthState, TaskStore, TasksState};
