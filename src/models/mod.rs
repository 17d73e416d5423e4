pub mod task;
pub mod user;

pub use task::{NewTask, Task, TaskUpdate, TASK_COLUMNS};
pub use user::{User, UserInfo, ADMIN_ROLE};
