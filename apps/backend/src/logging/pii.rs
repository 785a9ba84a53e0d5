use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Email pattern: standard addresses, used to mask the local part
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

/// Token pattern: base64url runs of 16+ chars. Session tokens are JWTs, so
/// this catches each dot-separated segment of a leaked token.
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9_-]{16,}={0,2}\b").unwrap()
});

/// Redacts sensitive information from a string.
///
/// Emails keep the first character of the local part and the full domain;
/// base64url token runs are replaced wholesale. Emails are processed first
/// so token matching never eats part of an address.
pub fn redact(input: &str) -> String {
    let email_redacted = EMAIL_REGEX.replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(at_pos) if at_pos > 0 => {
                let first_char = &full_match[..1];
                let domain = &full_match[at_pos..];
                format!("{first_char}***{domain}")
            }
            _ => full_match.to_string(),
        }
    });

    TOKEN_REGEX
        .replace_all(&email_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// A wrapper that redacts a sensitive string when formatted for logging.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_local_part_is_masked() {
        assert_eq!(redact("user@example.com"), "u***@example.com");
        assert_eq!(redact("a@test.org"), "a***@test.org");
        assert_eq!(redact("test+alias@example.co.uk"), "t***@example.co.uk");
    }

    #[test]
    fn jwt_segments_are_redacted() {
        let line = "rejected token eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.payloadpayloadpayload.sigsigsigsigsigsig";
        let redacted = redact(line);
        assert!(!redacted.contains("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"));
        assert!(redacted.contains("[REDACTED_TOKEN]"));
    }

    #[test]
    fn short_identifiers_pass_through() {
        assert_eq!(redact("user123 logged in"), "user123 logged in");
    }

    #[test]
    fn redacted_wrapper_applies_on_display() {
        assert_eq!(format!("{}", Redacted("user@example.com")), "u***@example.com");
    }
}
