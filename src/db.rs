//! Connection pool setup and schema bootstrap.
//!
//! The schema is small enough to live here as two idempotent `CREATE TABLE IF
//! NOT EXISTS` statements. Bootstrapping also seeds the administrative account
//! when no user with the configured name exists yet.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::auth::hash_password;
use crate::config::AdminAccount;
use crate::error::AppError;
use crate::models::ADMIN_ROLE;

const CREATE_TASKS: &str = "
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        email TEXT NOT NULL,
        text TEXT NOT NULL,
        completed BOOLEAN DEFAULT FALSE,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

const CREATE_USERS: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL,
        role TEXT DEFAULT 'user'
    )";

/// Opens a pool for `database_url`, creating the database file if needed.
///
/// An in-memory URL (`sqlite::memory:`) gives every connection its own
/// database, so callers using one should pass `max_connections = 1`.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Creates the `tasks` and `users` tables if they do not exist.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_TASKS).execute(pool).await?;
    sqlx::query(CREATE_USERS).execute(pool).await?;
    log::info!("Database schema ready");
    Ok(())
}

/// Inserts the administrative account unless a user with that name exists.
/// Returns whether a row was created.
pub async fn seed_admin(pool: &SqlitePool, admin: &AdminAccount) -> Result<bool, AppError> {
    let existing = sqlx::query_as::<_, (i64,)>("SELECT id FROM users WHERE username = ?")
        .bind(&admin.username)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password, admin.password_cost)?;
    sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
        .bind(&admin.username)
        .bind(password_hash)
        .bind(ADMIN_ROLE)
        .execute(pool)
        .await?;

    log::info!("Admin user '{}' created", admin.username);
    Ok(true)
}

/// Schema creation followed by the admin seed.
pub async fn bootstrap(pool: &SqlitePool, admin: &AdminAccount) -> Result<(), AppError> {
    init_schema(pool).await?;
    seed_admin(pool, admin).await?;
    Ok(())
}
