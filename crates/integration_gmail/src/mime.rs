//! RFC 2822 message assembly
//!
//! Builds the raw message the Gmail API expects: CRLF-separated headers with
//! a B-encoded subject, followed by a plain-text body, the whole thing
//! base64url-encoded without padding.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

/// Encode a subject line as an RFC 2047 encoded-word.
///
/// Gmail accepts arbitrary UTF-8 subjects only in this form.
pub fn encode_subject(subject: &str) -> String {
    format!("=?utf-8?B?{}?=", STANDARD.encode(subject))
}

/// Assemble a single-part plain-text message.
///
/// The caller must have validated `to` and `subject` for header safety; this
/// function only does the mechanical assembly.
pub fn build_message(to: &str, subject: &str, body: &str) -> String {
    format!(
        "To: {to}\r\n\
         Subject: {subject}\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: text/plain; charset=\"UTF-8\"\r\n\
         Content-Transfer-Encoding: 7bit\r\n\
         \r\n\
         {body}",
        subject = encode_subject(subject),
    )
}

/// Base64url-encode a raw message for the `raw` field of the send call.
pub fn encode_raw(message: &str) -> String {
    URL_SAFE_NO_PAD.encode(message)
}
