//! Access-token verification for protected scopes.
//!
//! Reads `x-access-token`, verifies it and stores an [`AuthenticatedContext`]
//! in request extensions. Rejections are rendered here as 401 responses and
//! the wrapped service is not called.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::HeaderValue;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::AuthenticatedContext;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
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
        let verdict = match req.app_data::<web::Data<AppState>>() {
            Some(state) => verify_request(req.headers().get(ACCESS_TOKEN_HEADER), &state.security),
            None => Err(AppError::internal("AppState not available")),
        };

        match verdict {
            Ok(ctx) => {
                req.extensions_mut().insert(ctx);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            // Rendered inside the returned future so the request's trace
            // scope is active.
            Err(err) => Box::pin(async move {
                if err.is_unauthorized() {
                    security::token_rejected(err.code(), req.path());
                }
                Ok(req
                    .into_response(err.error_response())
                    .map_into_right_body())
            }),
        }
    }
}

/// Decide whether a request carrying `header` is admitted.
///
/// Absent or empty header is `MissingToken`. A value that is not visible
/// ASCII, fails to decode, or lacks `sub`/`exp` is `InvalidToken`. An expired
/// token is `ExpiredToken`.
pub fn verify_request(
    header: Option<&HeaderValue>,
    security: &SecurityConfig,
) -> Result<AuthenticatedContext, AppError> {
    let raw = header.ok_or(AppError::MissingToken)?;
    if raw.is_empty() {
        return Err(AppError::MissingToken);
    }

    let token = raw.to_str().map_err(|_| AppError::InvalidToken)?;
    let claims = verify_access_token(token, security)?;

    AuthenticatedContext::from_claims(claims).ok_or(AppError::InvalidToken)
}
