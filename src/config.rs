use crate::error::AppError;
use std::env;

const DEFAULT_DB_PATH: &str = "database.sqlite";
const FALLBACK_JWT_SECRET: &str = "fallback-secret-key";

/// Settings used to sign and verify bearer tokens.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

/// The administrative account seeded at startup.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    pub password_cost: u32,
}

pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub auth: AuthConfig,
    pub admin: AdminAccount,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            let path = lookup("DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
            format!("sqlite://{}", path)
        });

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            log::warn!("JWT_SECRET is not set, signing tokens with the fallback secret");
            FALLBACK_JWT_SECRET.to_string()
        });

        Ok(Self {
            database_url,
            server_port: parse_or(&lookup, "SERVER_PORT", 5000)?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            auth: AuthConfig {
                jwt_secret,
                token_ttl_hours: parse_or(&lookup, "TOKEN_TTL_HOURS", 24)?,
            },
            admin: AdminAccount {
                username: lookup("ADMIN_USERNAME").unwrap_or_else(|| "admin".to_string()),
                password: lookup("ADMIN_PASSWORD").unwrap_or_else(|| "123".to_string()),
                password_cost: parse_or(&lookup, "BCRYPT_COST", 10)?,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::InternalServerError(format!("{} must be a number", key))),
        None => Ok(default),
    }
}
