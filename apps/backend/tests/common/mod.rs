#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderName;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Value of a response header that must be present and non-empty.
pub fn header_value<B>(resp: &ServiceResponse<B>, name: &'static str) -> String {
    let value = resp
        .headers()
        .get(HeaderName::from_static(name))
        .and_then(|v| v.to_str().ok())
        .unwrap_or_else(|| panic!("{name} header should be present and valid UTF-8"))
        .to_string();
    assert!(!value.is_empty(), "{name} header should not be empty");
    value
}
