//! Client-side mirror of the server's task and session state.
//!
//! The state types are plain data with synchronous transitions, so a UI can
//! render them at any point. [`TaskStore`] drives those transitions around the
//! HTTP calls: every operation marks the slice as loading, performs one
//! request and then records either the result or a readable error message.

use crate::auth::{AuthResponse, LoginRequest};
use crate::client::api::{ApiClient, ClientError};
use crate::models::{NewTask, Task, TaskUpdate, UserInfo};
use crate::pagination::{PageRequest, Pagination, SortField, SortOrder, TaskPage};

const FETCH_FAILED: &str = "Failed to fetch tasks";
const CREATE_FAILED: &str = "Failed to create task";
const UPDATE_FAILED: &str = "Failed to update task";
const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, PartialEq)]
pub struct TasksState {
    /// Tasks of the current page, in display order.
    pub tasks: Vec<Task>,
    pub pagination: Option<Pagination>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub current_page: i64,
}

impl Default for TasksState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            pagination: None,
            is_loading: false,
            error: None,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            current_page: 1,
        }
    }
}

impl TasksState {
    /// The listing request for the current page and sort.
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.current_page,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }

    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn page_loaded(&mut self, page: TaskPage) {
        self.is_loading = false;
        self.tasks = page.tasks;
        self.pagination = Some(page.pagination);
        self.error = None;
    }

    /// New tasks go first, matching the default newest-first listing.
    pub fn task_created(&mut self, task: Task) {
        self.is_loading = false;
        self.tasks.insert(0, task);
        self.error = None;
    }

    /// Replaces the task with the same id in place; unknown ids are ignored.
    pub fn task_updated(&mut self, task: Task) {
        self.is_loading = false;
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
        self.error = None;
    }

    /// Changing the sort always returns to the first page.
    pub fn set_sorting(&mut self, sort_by: SortField, sort_order: SortOrder) {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self.current_page = 1;
    }

    pub fn set_page(&mut self, page: i64) {
        self.current_page = page.max(1);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map_or(false, UserInfo::is_admin)
    }

    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn logged_in(&mut self, response: AuthResponse) {
        self.is_loading = false;
        self.token = Some(response.token);
        self.user = Some(response.user);
        self.error = None;
    }

    pub fn user_loaded(&mut self, user: UserInfo) {
        self.is_loading = false;
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.is_loading = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Client-side store: the two state slices plus the API they mirror.
#[derive(Debug, Clone)]
pub struct TaskStore {
    api: ApiClient,
    pub tasks: TasksState,
    pub auth: AuthState,
}

impl TaskStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            tasks: TasksState::default(),
            auth: AuthState::default(),
        }
    }

    /// Starts from a previously stored token; call
    /// [`restore_session`](Self::restore_session) to load the user.
    pub fn with_token(api: ApiClient, token: impl Into<String>) -> Self {
        let mut store = Self::new(api);
        store.auth.token = Some(token.into());
        store
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetches the current page with the current sort.
    pub async fn fetch_tasks(&mut self) -> Result<(), ClientError> {
        self.tasks.begin();
        match self.api.fetch_tasks(&self.tasks.page_request()).await {
            Ok(page) => {
                self.tasks.page_loaded(page);
                Ok(())
            }
            Err(err) => {
                self.tasks.fail(err.message_or(FETCH_FAILED));
                Err(err)
            }
        }
    }

    pub async fn change_page(&mut self, page: i64) -> Result<(), ClientError> {
        self.tasks.set_page(page);
        self.fetch_tasks().await
    }

    pub async fn change_sorting(
        &mut self,
        sort_by: SortField,
        sort_order: SortOrder,
    ) -> Result<(), ClientError> {
        self.tasks.set_sorting(sort_by, sort_order);
        self.fetch_tasks().await
    }

    pub async fn create_task(&mut self, task: NewTask) -> Result<Task, ClientError> {
        self.tasks.begin();
        match self.api.create_task(&task).await {
            Ok(created) => {
                self.tasks.task_created(created.clone());
                Ok(created)
            }
            Err(err) => {
                self.tasks.fail(err.message_or(CREATE_FAILED));
                Err(err)
            }
        }
    }

    /// Sends the update with the stored token, then re-fetches the current
    /// page whether or not the update succeeded. The two requests are not
    /// atomic; writes from other clients may show up in the refresh.
    pub async fn update_task(&mut self, id: i64, changes: TaskUpdate) -> Result<Task, ClientError> {
        self.tasks.begin();
        let result = self
            .api
            .update_task(id, &changes, self.auth.token.as_deref())
            .await;

        let outcome = match result {
            Ok(updated) => {
                self.tasks.task_updated(updated.clone());
                Ok(updated)
            }
            Err(err) => {
                self.tasks.fail(err.message_or(UPDATE_FAILED));
                Err(err)
            }
        };

        if let Err(err) = self.refresh_after_update().await {
            log::debug!("refresh after update failed: {}", err);
        }
        outcome
    }

    // A failed update leaves its message in place unless the refresh itself fails.
    async fn refresh_after_update(&mut self) -> Result<(), ClientError> {
        let pending_error = self.tasks.error.take();
        let refreshed = self.fetch_tasks().await;
        if refreshed.is_ok() && pending_error.is_some() {
            self.tasks.error = pending_error;
        }
        refreshed
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<UserInfo, ClientError> {
        self.auth.begin();
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        match self.api.login(&credentials).await {
            Ok(response) => {
                let user = response.user.clone();
                self.auth.logged_in(response);
                Ok(user)
            }
            Err(err) => {
                self.auth.fail(err.message_or(LOGIN_FAILED));
                Err(err)
            }
        }
    }

    /// Loads the user for a stored token when none is known yet. A token the
    /// server no longer accepts is discarded.
    pub async fn restore_session(&mut self) -> Result<(), ClientError> {
        let token = match (&self.auth.token, &self.auth.user) {
            (Some(token), None) => token.clone(),
            _ => return Ok(()),
        };

        self.auth.begin();
        match self.api.current_user(&token).await {
            Ok(user) => {
                self.auth.user_loaded(user);
                Ok(())
            }
            Err(err) => {
                self.auth.logout();
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) {
        self.auth.logout();
    }

    pub fn clear_error(&mut self) {
        self.tasks.clear_error();
    }
}
