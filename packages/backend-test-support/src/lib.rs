//! Backend test support utilities
//!
//! Unified logging initialization and assertions on the JSON error contract,
//! shared by the backend's unit and integration tests.

pub mod error_body;
pub mod logging;
