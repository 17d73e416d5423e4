pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::task::not_blank;
use crate::models::UserInfo;

pub use extractors::{AdminUser, AuthenticatedUser};
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Represents the payload for a login request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub username: String,
    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub password: String,
}

/// Response structure after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The bearer token to present on privileged requests.
    pub token: String,
    /// The logged-in user.
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            username: "admin".to_string(),
            password: "123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let blank_password = LoginRequest {
            username: "admin".to_string(),
            password: " ".to_string(),
        };
        assert!(blank_password.validate().is_err());

        let missing: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(missing.validate().is_err());
    }
}
