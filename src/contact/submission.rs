use std::sync::LazyLock;

use regex::Regex;

use super::FormFields;

/// Anything but form whitespace (see [`is_form_whitespace`]).
const NON_SPACE: &str = r"[\S\x{85}&&[^\x{FEFF}]]";

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{0}+@{0}+\.{0}+$", NON_SPACE)).unwrap());

/// User-facing problems shown inline above the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// The relay call failed; details go to the log, not the user.
    #[error("Failed to send message. Please try again later.")]
    DeliveryFailed,
}

/// A validated message ready for the relay.
///
/// Only obtainable through [`Submission::parse`], so every value holds
/// trimmed, non-empty fields and a plausibly shaped email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: String,
    message: String,
}

impl Submission {
    /// Trim the form fields and check them.
    ///
    /// Missing fields are reported before a malformed email.
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        let name = trim(&fields.name);
        let email = trim(&fields.email);
        let message = trim(&fields.message);

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Whitespace as form inputs treat it: Unicode `White_Space` plus the
/// byte-order mark U+FEFF, minus NEL U+0085.
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn trim(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// `local@domain.tld` shape: no whitespace, an `@`, and a dot after it.
pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}
