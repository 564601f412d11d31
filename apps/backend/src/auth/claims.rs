//! Identity attached to a request once its access token has been admitted.

use serde::Serialize;

use super::jwt::DecodedClaims;

/// Request-scoped context inserted into request extensions by the
/// `JwtExtract` middleware. Lives only for the request it was attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedContext {
    /// Registration number of the authenticated student (`sub` claim)
    pub ra: String,
}

impl AuthenticatedContext {
    /// Admit decoded claims only if they carry a non-empty subject and an expiry.
    pub fn from_claims(claims: DecodedClaims) -> Option<Self> {
        match (claims.sub, claims.exp) {
            (Some(sub), Some(_)) if !sub.is_empty() => Some(Self { ra: sub }),
            _ => None,
        }
    }
}
