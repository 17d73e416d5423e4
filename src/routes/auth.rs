use crate::{
    auth::{generate_token, verify_password, AuthMiddleware, AuthResponse, AuthenticatedUser, LoginRequest},
    config::AuthConfig,
    error::AppError,
    models::{User, UserInfo},
};
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::SqlitePool;
use validator::Validate;

/// Login user
///
/// Checks the credentials against the `users` table and returns a bearer token
/// together with the public user record.
#[post("/login")]
pub async fn login(
    pool: web::Data<SqlitePool>,
    settings: web::Data<AuthConfig>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data
        .validate()
        .map_err(|_| AppError::BadRequest("Username and password are required".into()))?;

    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password, role FROM users WHERE username = ?",
    )
    .bind(&login_data.username)
    .fetch_optional(&**pool)
    .await?;

    match user {
        Some(user) if verify_password(&login_data.password, &user.password)? => {
            let user = UserInfo::from(user);
            let token = generate_token(&user, &settings)?;
            log::info!("User '{}' logged in", user.username);
            Ok(HttpResponse::Ok().json(AuthResponse { token, user }))
        }
        _ => {
            log::warn!("Failed login attempt for '{}'", login_data.username);
            Err(AppError::Unauthorized("Invalid credentials".into()))
        }
    }
}

/// Current user
///
/// Resolves the bearer token back to the stored user record.
#[get("/me", wrap = "AuthMiddleware")]
pub async fn me(
    pool: web::Data<SqlitePool>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT id, username, password, role FROM users WHERE id = ?")
        .bind(caller.0.id)
        .fetch_optional(&**pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(HttpResponse::Ok().json(UserInfo::from(user)))
}
