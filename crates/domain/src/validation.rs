//! Input validation shared by the compose and send flows
//!
//! Both API endpoints assemble user input into raw protocol headers further
//! down the pipeline, so embedded CR/LF characters must be rejected before
//! any external call is made.

use crate::errors::DomainError;

/// Reject values containing carriage-return or line-feed characters.
///
/// Applied to every field that ends up in an RFC 2822 header line
/// (recipient, subject, topic).
pub fn ensure_header_safe(field: &str, value: &str) -> Result<(), DomainError> {
    if value.contains('\r') || value.contains('\n') {
        return Err(DomainError::validation(format!(
            "{field} must not contain line breaks"
        )));
    }
    Ok(())
}

/// Reject values that are empty after trimming.
pub fn ensure_present(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}
