//! Input patterns for registration fields.

use regex::Regex;
use std::sync::LazyLock;

/// Letters and spaces only, at least 4 characters.
pub static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{4,}$").unwrap());

pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,7}$").unwrap()
});
