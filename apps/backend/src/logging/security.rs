use tracing::{info, warn};

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Why a login attempt was refused. Logged only, never sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    UnknownEmail,
    SecretMismatch,
}

impl LoginFailure {
    fn as_str(self) -> &'static str {
        match self {
            LoginFailure::UnknownEmail => "unknown_email",
            LoginFailure::SecretMismatch => "secret_mismatch",
        }
    }
}

pub fn login_failed(reason: LoginFailure, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason = reason.as_str(),
        "Authentication failure"
    );
}

pub fn login_succeeded(ra: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_LOGIN_SUCCEEDED",
        %trace_id,
        ra,
        email = %Redacted(email),
        "Token issued"
    );
}

/// `code` is the `AppError::code()` of the rejection.
pub fn token_rejected(code: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        code,
        path,
        "Access token rejected"
    );
}
