//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// WHATWG "valid email address": RFC 5322 atext local part, dot-separated
// domain labels of 1-63 alphanumerics/hyphens not starting or ending in '-'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' with a non-empty local part before it
/// - Local part made of letters, digits and ``.!#$%&'*+/=?^_`{|}~-``
/// - Domain labels without empty parts or leading/trailing hyphens
///
/// A dotless domain such as `localhost` is accepted.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("jane@example.com")]
    #[case("test.user@example.co.uk")]
    #[case("user+tag@example.com")]
    #[case("user_name@example-domain.com")]
    #[case("o'brien@example.com")]
    #[case("x&y@example.com")]
    #[case("a!b@example.io")]
    #[case("user@localhost")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email), "{email} should be accepted");
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("@")]
    #[case("user@")]
    #[case("@example.com")]
    #[case("user@@example.com")]
    #[case("user@.com")]
    #[case("user@example..com")]
    #[case("user@example.com.")]
    #[case("user@-example.com")]
    #[case("user name@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email), "{email} should be rejected");
    }
}
