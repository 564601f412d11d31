use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::jwt::DecodeError;
use crate::repos::alunos::StoreError;
use crate::trace_ctx;

pub const MSG_TOKEN_MISSING: &str = "Token não informado";
pub const MSG_TOKEN_INVALID: &str = "Token inválido, faça o login";
pub const MSG_TOKEN_EXPIRED: &str = "Token expirado, faça o login novamente";
pub const MSG_BAD_CREDENTIALS: &str = "Usuário e/ou senha incorretos";
pub const MSG_INTERNAL: &str = "Erro interno do servidor";

/// Body of a rejection from the token middleware.
#[derive(Serialize)]
struct TokenRejection {
    message: &'static str,
    auth: bool,
}

/// Body of a rejected login. `token` is always serialized as `null`.
#[derive(Serialize)]
struct LoginRejection {
    auth: bool,
    token: Option<String>,
    message: &'static str,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Token missing")]
    MissingToken,
    #[error("Token invalid")]
    InvalidToken,
    #[error("Token expired")]
    ExpiredToken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable machine-readable code, used in logs only.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingToken => "TOKEN_MISSING",
            AppError::InvalidToken => "TOKEN_INVALID",
            AppError::ExpiredToken => "TOKEN_EXPIRED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::BadRequest { .. } => "BAD_REQUEST",
            AppError::Db { .. } => "DB_ERROR",
            AppError::Internal { .. } => "INTERNAL",
            AppError::Config { .. } => "CONFIG_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken
            | AppError::InvalidToken
            | AppError::ExpiredToken
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Db { .. } | AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for the user-facing `Unauthorized` family.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == StatusCode::UNAUTHORIZED
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }
}

impl From<DecodeError> for AppError {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::Expired => AppError::ExpiredToken,
            DecodeError::InvalidSignature | DecodeError::Malformed => AppError::InvalidToken,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::db(e.to_string())
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl From<db_infra::DbInfraError> for AppError {
    fn from(e: db_infra::DbInfraError) -> Self {
        match e {
            db_infra::DbInfraError::Config { message } => AppError::config(message),
            other => AppError::db(other.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();
        let mut builder = HttpResponse::build(status);
        builder.insert_header(("x-trace-id", trace_id.clone()));

        match self {
            AppError::MissingToken => builder.json(TokenRejection {
                message: MSG_TOKEN_MISSING,
                auth: false,
            }),
            AppError::InvalidToken => builder.json(TokenRejection {
                message: MSG_TOKEN_INVALID,
                auth: false,
            }),
            AppError::ExpiredToken => builder.json(TokenRejection {
                message: MSG_TOKEN_EXPIRED,
                auth: false,
            }),
            AppError::InvalidCredentials => builder.json(LoginRejection {
                auth: false,
                token: None,
                message: MSG_BAD_CREDENTIALS,
            }),
            AppError::NotFound { detail } | AppError::BadRequest { detail } => {
                builder.json(MessageBody { message: detail })
            }
            AppError::Db { detail } | AppError::Internal { detail } | AppError::Config { detail } => {
                error!(code = self.code(), %trace_id, detail = %detail, "internal_error");
                builder.json(MessageBody {
                    message: MSG_INTERNAL,
                })
            }
        }
    }
}
