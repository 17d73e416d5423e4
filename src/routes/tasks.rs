use crate::{
    auth::{AdminUser, AuthMiddleware},
    error::AppError,
    models::{NewTask, Task, TaskUpdate, TASK_COLUMNS},
    pagination::{PageRequest, Pagination, TaskListQuery, TaskPage},
};
use actix_web::{get, post, put, web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

const MISSING_FIELDS: &str = "Username, email, and text are required";

/// Lists one page of tasks.
///
/// ## Query Parameters:
/// - `page` (optional): 1-based page number, default 1.
/// - `sortBy` (optional): `username`, `email`, `created_at` or `completed`, default `created_at`.
/// - `sortOrder` (optional): `ASC` or `DESC` in any case, default `DESC`.
///
/// Unrecognized values fall back to the defaults.
///
/// ## Responses:
/// - `200 OK`: `{ "tasks": [...], "pagination": { current, total, limit, totalItems } }`.
/// - `500 Internal Server Error`: For database errors.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<SqlitePool>,
    query_params: web::Query<TaskListQuery>,
) -> Result<impl Responder, AppError> {
    let request = PageRequest::from(query_params.into_inner());

    let (total_items,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(&**pool)
        .await?;

    // The ORDER BY clause only ever contains allow-listed identifiers.
    let sql = format!(
        "SELECT {} FROM tasks ORDER BY {} LIMIT ? OFFSET ?",
        TASK_COLUMNS,
        request.order_clause()
    );
    let tasks = sqlx::query_as::<_, Task>(&sql)
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(TaskPage {
        tasks,
        pagination: Pagination::new(request.page, request.limit(), total_items),
    }))
}

/// Creates a new task. Open to any caller.
///
/// ## Request Body:
/// - `username`, `email`, `text`: all required and non-blank.
///
/// ## Responses:
/// - `201 Created`: The stored task, id included, with `completed = false`.
/// - `400 Bad Request`: If any field is missing or blank.
/// - `500 Internal Server Error`: For database errors.
#[post("")]
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    task_data: web::Json<NewTask>,
) -> Result<impl Responder, AppError> {
    task_data
        .validate()
        .map_err(|_| AppError::BadRequest(MISSING_FIELDS.into()))?;

    let task = task_data.into_inner();
    let now = Utc::now();

    let created = sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (username, email, text, completed, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(task.username)
    .bind(task.email)
    .bind(task.text)
    .bind(false)
    .bind(now)
    .bind(now)
    .fetch_one(&**pool)
    .await?;

    log::info!("Task {} created", created.id);
    Ok(HttpResponse::Created().json(created))
}

/// Updates the text and/or completion flag of a task. Admin only.
///
/// ## Path Parameters:
/// - `id`: The integer id of the task.
///
/// ## Request Body:
/// - `text` (optional): New non-blank text.
/// - `completed` (optional): New completion flag.
///
/// ## Responses:
/// - `200 OK`: The updated task.
/// - `400 Bad Request`: If neither field is supplied or `text` is blank.
/// - `401 Unauthorized`: If the bearer token is missing or invalid.
/// - `403 Forbidden`: If the token's role is not `admin`.
/// - `404 Not Found`: If no task has that id.
/// - `500 Internal Server Error`: For database errors.
#[put("/{id}", wrap = "AuthMiddleware")]
pub async fn update_task(
    admin: AdminUser,
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    let changes = task_data.into_inner();
    if changes.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }
    changes
        .validate()
        .map_err(|_| AppError::BadRequest("Task text cannot be empty".into()))?;

    let task_id = task_id.into_inner();

    let mut assignments = Vec::new();
    if changes.text.is_some() {
        assignments.push("text = ?");
    }
    if changes.completed.is_some() {
        assignments.push("completed = ?");
    }
    assignments.push("updated_at = ?");

    let sql = format!(
        "UPDATE tasks SET {} WHERE id = ? RETURNING {}",
        assignments.join(", "),
        TASK_COLUMNS
    );

    let mut query_builder = sqlx::query_as::<_, Task>(&sql);
    if let Some(text) = changes.text {
        query_builder = query_builder.bind(text);
    }
    if let Some(completed) = changes.completed {
        query_builder = query_builder.bind(completed);
    }
    query_builder = query_builder.bind(Utc::now()).bind(task_id);

    let updated = query_builder
        .fetch_optional(&**pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    log::info!("Task {} updated by '{}'", updated.id, admin.0.username);
    Ok(HttpResponse::Ok().json(updated))
}
