use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

use crate::auth::{AuthResponse, LoginRequest};
use crate::models::{NewTask, Task, TaskUpdate, UserInfo};
use crate::pagination::{PageRequest, TaskPage};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// A failed API call.
#[derive(Debug)]
pub enum ClientError {
    /// The server answered with a non-success status.
    Api { status: u16, message: Option<String> },
    /// The request never produced a usable response.
    Transport(reqwest::Error),
}

impl ClientError {
    /// The server's message, or `fallback` when there is none.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::Api { status, message } => match message {
                Some(message) => write!(f, "API error {}: {}", status, message),
                None => write!(f, "API error {}", status),
            },
            ClientError::Transport(err) => write!(f, "Transport error: {}", err),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::Transport(error)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Thin typed wrapper over the HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Reads the base URL from `API_URL`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_tasks(&self, request: &PageRequest) -> Result<TaskPage, ClientError> {
        log::debug!("GET /tasks {:?}", request);
        send(self.http.get(self.url("/tasks")).query(request)).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ClientError> {
        log::debug!("POST /tasks");
        send(self.http.post(self.url("/tasks")).json(task)).await
    }

    pub async fn update_task(
        &self,
        id: i64,
        changes: &TaskUpdate,
        token: Option<&str>,
    ) -> Result<Task, ClientError> {
        log::debug!("PUT /tasks/{}", id);
        let mut request = self.http.put(self.url(&format!("/tasks/{}", id))).json(changes);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        send(request).await
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ClientError> {
        log::debug!("POST /auth/login");
        send(self.http.post(self.url("/auth/login")).json(credentials)).await
    }

    pub async fn current_user(&self, token: &str) -> Result<UserInfo, ClientError> {
        log::debug!("GET /auth/me");
        send(self.http.get(self.url("/auth/me")).bearer_auth(token)).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    log::debug!("request failed with {}: {:?}", status, message);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
