//! Email shape checking.
//!
//! A standalone utility; no handler currently calls it.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Reports whether `email` looks like an address.
///
/// Requires a local part, an `@`, a domain, and a final dot-separated
/// segment of at least two letters. Matching is case-insensitive.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
