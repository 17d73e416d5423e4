#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;
use sqlx::SqlitePool;
use taskboard::auth::generate_token;
use taskboard::config::{AdminAccount, AuthConfig};
use taskboard::db;
use taskboard::models::UserInfo;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "123";

pub struct TestContext {
    pub pool: SqlitePool,
    pub auth: AuthConfig,
}

/// Fresh in-memory database with the schema and admin account in place.
pub async fn setup() -> TestContext {
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");
    let admin = AdminAccount {
        username: ADMIN_USERNAME.to_string(),
        password: ADMIN_PASSWORD.to_string(),
        password_cost: taskboard::auth::password::MIN_COST,
    };
    db::bootstrap(&pool, &admin)
        .await
        .expect("Failed to bootstrap database");

    TestContext {
        pool,
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            token_ttl_hours: 1,
        },
    }
}

impl TestContext {
    pub fn token_for(&self, role: &str) -> String {
        let user = UserInfo {
            id: 1,
            username: format!("{}_user", role),
            role: role.to_string(),
        };
        generate_token(&user, &self.auth).expect("Failed to sign test token")
    }

    pub fn admin_token(&self) -> String {
        self.token_for("admin")
    }

    pub fn bearer(&self, token: &str) -> (actix_web::http::header::HeaderName, String) {
        (actix_web::http::header::AUTHORIZATION, format!("Bearer {}", token))
    }
}

/// Builds the application the same way the binary does.
#[macro_export]
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.pool.clone()))
                .app_data(actix_web::web::Data::new($ctx.auth.clone()))
                .wrap(actix_web::middleware::Logger::default())
                .service(taskboard::routes::health::health)
                .service(actix_web::web::scope("/api").configure(taskboard::routes::config)),
        )
        .await
    };
}

pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Response is not JSON ({}): {}",
            e,
            String::from_utf8_lossy(&body)
        )
    })
}
