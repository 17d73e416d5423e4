//! View models for a task board front end. They hold no rendering code: each
//! one turns store state into what a view shows and back into store actions.

pub mod form;
pub mod header;
pub mod list;
pub mod pager;
pub mod task_item;

pub use form::{LoginForm, TaskForm};
pub use header::HeaderView;
pub use list::ListBody;
pub use pager::{visible_pages, PageItem, PagerView};
pub use task_item::{ItemControl, TaskEditor};
