use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::verify_token;
use crate::config::AuthConfig;
use crate::error::AppError;

/// Requires a valid bearer token and stores its [`Claims`](crate::auth::Claims)
/// in the request extensions.
///
/// The signing settings are read from `web::Data<AuthConfig>`. Role checks are
/// left to the extractors, so a valid token with the wrong role reaches the
/// handler boundary and is rejected there with 403. Rejections are answered
/// directly as `{"message"}` responses instead of propagating as errors.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let settings = match req.app_data::<web::Data<AuthConfig>>() {
            Some(settings) => settings.clone(),
            None => {
                let app_err = AppError::InternalServerError("AuthConfig is not registered".into());
                return reject(req, app_err);
            }
        };

        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        let Some(token) = token else {
            log::debug!("{} {}: no bearer token", req.method(), req.path());
            return reject(req, AppError::Unauthorized("No token provided".into()));
        };

        match verify_token(token, &settings) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(app_err) => {
                log::warn!("{} {}: {}", req.method(), req.path(), app_err);
                reject(req, app_err)
            }
        }
    }
}

fn reject<B: 'static>(
    req: ServiceRequest,
    app_err: AppError,
) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
    let response = req.into_response(app_err.error_response()).map_into_right_body();
    Box::pin(async move { Ok(response) })
}
