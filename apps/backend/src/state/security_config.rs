use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Lifetime of an access token from issuance.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Environment variable holding the shared signing secret.
pub const SECRET_ENV_VAR: &str = "SECRET_KEY";

/// Configuration for JWT signing and verification
#[derive(Clone)]
pub struct SecurityConfig {
    /// Shared secret for HS256 signing and verification
    pub jwt_secret: Vec<u8>,
    /// Pinned algorithm; tokens carrying another `alg` are rejected
    pub algorithm: Algorithm,
    pub token_ttl: Duration,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: ACCESS_TOKEN_TTL,
        }
    }

    /// Read the signing secret from `SECRET_KEY`.
    ///
    /// An unset or blank secret is a configuration error; there is no fallback.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var(SECRET_ENV_VAR) {
            Ok(secret) if !secret.trim().is_empty() => Ok(Self::new(secret.into_bytes())),
            Ok(_) => Err(AppError::config(format!("{SECRET_ENV_VAR} is set but empty"))),
            Err(_) => Err(AppError::config(format!("{SECRET_ENV_VAR} must be set"))),
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(b"test_secret_key_for_testing_purposes_only".to_vec())
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"***")
            .field("algorithm", &self.algorithm)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
