pub mod claims;
pub mod jwt;
pub mod secret;

pub use claims::AuthenticatedContext;
pub use jwt::{
    mint_access_token, verify_access_token, verify_access_token_at, Claims, DecodeError,
    DecodedClaims,
};
pub use secret::{DigestEquality, SecretVerifier};
