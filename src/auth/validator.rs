//! Format-only checks for login input.

use regex::Regex;

/// Basic `local@domain.tld` shape check: no whitespace or extra `@` in any part.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|re| re.is_match(email))
}

/// At least 8 characters from letters, digits and `@$!%*#?&`, with at least
/// one ASCII letter and one ASCII digit.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    // the regex crate has no lookahead, so letter/digit presence is checked separately
    Regex::new(r"^[A-Za-z0-9@$!%*#?&]{8,}$").is_ok_and(|re| re.is_match(password))
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}
