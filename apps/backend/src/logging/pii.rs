//! Redaction for values that end up in log lines.
//!
//! Emails keep the first character of the local part and the full domain.
//! JWT-shaped strings (three dot-separated base64url segments) and long opaque
//! runs are replaced wholesale.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[allow(clippy::unwrap_used)]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

#[allow(clippy::unwrap_used)]
static JWT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b").unwrap()
});

#[allow(clippy::unwrap_used)]
static OPAQUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z0-9+/_-]{32,}={0,2}").unwrap());

const MASK: &str = "[REDACTED_TOKEN]";

pub fn redact(input: &str) -> String {
    let emails = EMAIL.replace_all(input, |caps: &Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                let first: String = local.chars().take(1).collect();
                format!("{first}***@{domain}")
            }
            _ => full.to_string(),
        }
    });

    let jwts = JWT.replace_all(&emails, MASK);
    OPAQUE.replace_all(&jwts, MASK).into_owned()
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
