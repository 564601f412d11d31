pub mod auth;

pub use auth::{AuthService, LoginSuccess, DEFAULT_STORE_TIMEOUT};
