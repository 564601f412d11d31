use std::env;

use actix_cors::Cors;
use actix_web::http::header;

use super::jwt_extract::ACCESS_TOKEN_HEADER;
use super::request_trace::REQUEST_ID_HEADER;

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Origins from `CORS_ALLOWED_ORIGINS` (comma separated, `http(s)://` only),
/// falling back to the local front-end dev server.
pub fn allowed_origins() -> Vec<String> {
    let configured: Vec<String> = env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if configured.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured
    }
}

pub fn cors_middleware() -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::HeaderName::from_static(ACCESS_TOKEN_HEADER),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .max_age(3600);

    for origin in allowed_origins() {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
