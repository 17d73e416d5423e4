#![doc = "The `taskboard` library crate."]
#![doc = ""]
#![doc = "Anyone may submit a task with a username and email; a single administrator"]
#![doc = "marks tasks complete or edits their text. The crate holds the HTTP handlers,"]
#![doc = "schema bootstrap, bearer-token authentication, error mapping, and a client-side"]
#![doc = "state mirror with view models for a UI. The server binary lives in `main.rs`."]

pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod ui;

pub use crate::error::AppError;
pub use crate::models::{NewTask, Task, TaskUpdate};
