//! Editable email draft
//!
//! The subject/body pair produced by the draft generator together with the
//! recipient it was composed for. Lives only for one wizard traversal; the
//! user may rewrite subject and body during preview, after which the draft is
//! handed to the sender unchanged.

use serde::{Deserialize, Serialize};

use crate::value_objects::EmailAddress;

/// An email draft flowing through the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Recipient email address
    pub recipient: EmailAddress,
    /// Email subject
    pub subject: String,
    /// Email body (plain text)
    pub body: String,
}

impl Draft {
    /// Create a new draft
    pub fn new(
        recipient: EmailAddress,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient,
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Replace the subject (preview edit)
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    /// Replace the body (preview edit)
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }
}
