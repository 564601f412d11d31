#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

pub use auth::claims::AuthenticatedContext;
pub use auth::jwt::{
    mint_access_token, verify_access_token, verify_access_token_at, Claims, DecodeError,
    DecodedClaims,
};
pub use auth::secret::{DigestEquality, SecretVerifier};
pub use config::ServerConfig;
pub use db_infra::config::db::{DbOwner, RuntimeEnv};
pub use error::AppError;
pub use extractors::CurrentAluno;
pub use infra::db::connect_db;
pub use infra::state::{build_state, StateBuilder};
pub use middleware::cors::cors_middleware;
pub use middleware::jwt_extract::{JwtExtract, ACCESS_TOKEN_HEADER};
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use repos::alunos::{AlunoCredential, AlunoProfile, CredentialStore, StoreError};
pub use services::auth::{AuthService, LoginSuccess};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
