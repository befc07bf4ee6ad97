use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for PII redaction, compiled once.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Phone-like runs: optional `+`, then at least seven digits possibly
    /// separated by spaces, dashes, dots or parentheses.
    pub fn phone() -> &'static Regex {
        static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\+?\(?\d(?:[\s().-]*\d){6,}").unwrap()
        });
        &PHONE_REGEX
    }

    /// Opaque tokens: base64 or base64url runs of 16+ chars, which also covers
    /// hex and both halves of a session token.
    pub fn opaque_token() -> &'static Regex {
        static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"[A-Za-z0-9+/_-]{16,}={0,2}").unwrap()
        });
        &TOKEN_REGEX
    }
}

/// Redacts sensitive information from a string.
///
/// - Emails keep the first character of the local part and the full domain.
/// - Phones keep only their last two digits.
/// - Opaque tokens become `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    let emails = PiiRegexRegistry::email().replace_all(input, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("@{domain}"),
            },
            None => full.to_string(),
        }
    });

    let phones = PiiRegexRegistry::phone().replace_all(&emails, |caps: &regex::Captures| {
        let digits: Vec<char> = caps[0].chars().filter(char::is_ascii_digit).collect();
        let tail: String = digits[digits.len().saturating_sub(2)..].iter().collect();
        format!("***{tail}")
    });

    PiiRegexRegistry::opaque_token()
        .replace_all(&phones, "[REDACTED_TOKEN]")
        .to_string()
}

/// Display wrapper that redacts its contents, for use in log fields.
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
