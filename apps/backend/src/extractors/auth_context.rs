use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::AuthenticatedContext;
use crate::error::AppError;

/// Reads the context `JwtExtract` stored for this request. Outside a
/// protected scope there is none, which is reported as a missing token.
impl FromRequest for AuthenticatedContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedContext>()
                .cloned()
                .ok_or(AppError::MissingToken),
        )
    }
}
