use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// The caller identified by the bearer token.
///
/// Intended for routes wrapped in `AuthMiddleware`, which validates the token
/// and inserts its claims into the request extensions. Without them the
/// extractor fails with `AppError::Unauthorized`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_of(req).map(AuthenticatedUser).map_err(Into::into))
    }
}

/// An authenticated caller whose token carries the `admin` role.
/// Any other role is rejected with `AppError::Forbidden`.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = claims_of(req).and_then(|claims| {
            if claims.is_admin() {
                Ok(AdminUser(claims))
            } else {
                log::warn!("user '{}' ({}) denied admin access", claims.username, claims.role);
                Err(AppError::Forbidden("Admin access required".into()))
            }
        });
        ready(result.map_err(Into::into))
    }
}

fn claims_of(req: &HttpRequest) -> Result<Claims, AppError> {
    req.extensions()
        .get::<Claims>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized("No token provided".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    fn claims(role: &str) -> Claims {
        Claims {
            id: 1,
            username: "someone".to_string(),
            role: role.to_string(),
            exp: usize::MAX,
        }
    }

    #[actix_rt::test]
    async fn test_authenticated_user_extractor_success() {
        let req = test::TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims("user"));

        let extracted = AuthenticatedUser::from_request(&req, &mut Payload::None).await;
        assert_eq!(extracted.unwrap().0.role, "user");
    }

    #[actix_rt::test]
    async fn test_authenticated_user_extractor_failure() {
        let req = test::TestRequest::default().to_http_request();

        let err = AuthenticatedUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_admin_extractor_accepts_admin() {
        let req = test::TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims("admin"));

        assert!(AdminUser::from_request(&req, &mut Payload::None).await.is_ok());
    }

    #[actix_rt::test]
    async fn test_admin_extractor_rejects_other_roles() {
        let req = test::TestRequest::default().to_http_request();
        req.extensions_mut().insert(claims("user"));

        let err = AdminUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[actix_rt::test]
    async fn test_admin_extractor_without_claims_is_unauthorized() {
        let req = test::TestRequest::default().to_http_request();

        let err = AdminUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }
}
