//! HTTP handlers

pub mod auth;
pub mod draft;
pub mod health;
pub mod pages;
pub mod send;

use validator::Validate;

use crate::error::ApiError;

/// Run `validator` checks on a request body and flatten the field errors
/// into one message.
pub(crate) fn validate_request<T: Validate>(request: &T) -> Result<(), ApiError> {
    request.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error
                            .message
                            .as_ref()
                            .map_or_else(|| error.code.to_string(), ToString::to_string)
                    )
                })
            })
            .collect();

        ApiError::Validation(errors.join("; "))
    })
}
