//! Email address value object with validation
//!
//! Accepts any address of the shape `local@domain.tld` where no part contains
//! whitespace or a second `@`, and the domain carries at least one interior
//! dot. The original casing is preserved so a draft round-trips through the
//! send pipeline byte-for-byte.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A syntactically validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress {
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the shape
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not match `local@domain.tld`.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into().trim().to_string();

        if !has_valid_shape(&value) {
            return Err(DomainError::InvalidEmailAddress(value));
        }

        Ok(Self { value })
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Shape check: one `@`, no whitespace, non-empty local part, and a domain
/// with at least one dot that has characters on both sides.
fn has_valid_shape(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
