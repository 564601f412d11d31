use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Claims written into every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Student registration number (`aluno.ra`)
    pub sub: String,
    /// Display name, "nome sobrenome"
    pub name: String,
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Claims as read back from a token whose signature and expiry checked out.
///
/// Every field is optional: a correctly signed token may still lack the
/// subject or expiry, and deciding whether that is acceptable belongs to the
/// caller.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct DecodedClaims {
    pub sub: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub iat: Option<i64>,
    pub exp: Option<i64>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token could not be parsed")]
    Malformed,
    #[error("token has expired")]
    Expired,
}

/// Mint an HS256 access token valid for `security.token_ttl` from `now`.
pub fn mint_access_token(
    sub: &str,
    name: &str,
    email: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let claims = Claims {
        sub: sub.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        iat,
        exp: iat + security.token_ttl.as_secs() as i64,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature and expiry, returning whatever claims the token carries.
pub fn verify_access_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<DecodedClaims, DecodeError> {
    verify_access_token_at(token, SystemTime::now(), security)
}

/// Verify against an explicit clock. A token is expired once `now >= exp`.
///
/// Signature is checked before expiry, so a forged token that is also past
/// its `exp` reports `InvalidSignature`.
pub fn verify_access_token_at(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<DecodedClaims, DecodeError> {
    let mut validation = Validation::new(security.algorithm);
    // Expiry is compared below against `now`; presence of sub/exp is checked
    // by the middleware.
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let claims = decode::<DecodedClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => DecodeError::Expired,
        ErrorKind::InvalidSignature => DecodeError::InvalidSignature,
        _ => DecodeError::Malformed,
    })?;

    let now = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| DecodeError::Malformed)?
        .as_secs() as i64;

    match claims.exp {
        Some(exp) if exp <= now => Err(DecodeError::Expired),
        _ => Ok(claims),
    }
}
