//! Stateless validation predicates, one per semantic field kind.

use std::sync::LazyLock;

use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid format";
pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter email";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";
pub const EMPTY_PHONE_MESSAGE: &str = "Please enter phone number";
pub const SHORT_PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number";

/// Minimum phone length after whitespace is stripped.
pub const MIN_PHONE_LENGTH: usize = 10;

/// Approximate `local@domain.tld` shape; not RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.\-]+@([a-zA-Z0-9\-]+\.)+[a-zA-Z0-9]{2,4}$")
        .expect("Invalid email pattern")
});

static LEADING_CHAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L} ]").expect("Invalid leading character pattern"));

/// Outcome of evaluating one field or group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub invalid: bool,
    /// Message key to show when invalid.
    pub message: String,
    /// Set by the text, email and phone rules, whose message describes the
    /// value itself. These are never replaced by a field's custom error text.
    pub dynamic: bool,
}

impl Verdict {
    pub fn new(invalid: bool, message: impl Into<String>) -> Self {
        Self {
            invalid,
            message: message.into(),
            dynamic: false,
        }
    }

    fn dynamic(invalid: bool, message: impl Into<String>) -> Self {
        Self {
            dynamic: true,
            ..Self::new(invalid, message)
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.invalid
    }
}

/// A select must have a non-empty value.
pub fn required_selection(value: Option<&str>) -> Verdict {
    let invalid = value.is_none_or(str::is_empty);
    Verdict::new(invalid, REQUIRED_MESSAGE)
}

/// A checkbox or radio group must have at least one checked member.
pub fn required_group(any_checked: bool) -> Verdict {
    Verdict::new(!any_checked, REQUIRED_MESSAGE)
}

/// Free text must be non-empty and, unless `ignore_leading_char` is set, start
/// with a letter or a space.
pub fn text(value: &str, ignore_leading_char: bool) -> Verdict {
    let value = value.trim();
    let invalid = if ignore_leading_char || value.is_empty() {
        value.is_empty()
    } else {
        !LEADING_CHAR_PATTERN.is_match(value)
    };
    Verdict::dynamic(invalid, INVALID_FORMAT_MESSAGE)
}

/// Email must be present and look like `local@domain.tld` with a 2 to 4
/// character top-level segment.
pub fn email(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::dynamic(true, EMPTY_EMAIL_MESSAGE);
    }
    Verdict::dynamic(!EMAIL_PATTERN.is_match(value), INVALID_EMAIL_MESSAGE)
}

/// Phone numbers are checked with whitespace removed: present, at least
/// [`MIN_PHONE_LENGTH`] characters, and when any digits exist they must start
/// with `0`.
///
/// A long value containing no digits at all passes.
pub fn phone(value: &str) -> Verdict {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    if compact.is_empty() {
        return Verdict::dynamic(true, EMPTY_PHONE_MESSAGE);
    }
    if compact.chars().count() < MIN_PHONE_LENGTH {
        return Verdict::dynamic(true, SHORT_PHONE_MESSAGE);
    }

    let digits: String = compact.chars().filter(char::is_ascii_digit).collect();
    let invalid = !digits.is_empty() && !digits.starts_with('0');
    Verdict::dynamic(invalid, INVALID_PHONE_MESSAGE)
}
