//! Gmail integration
//!
//! REST client for the Gmail API: exchanges a long-lived OAuth refresh token
//! for a short-lived access token, assembles RFC 2822 messages, and delivers
//! them through the `users.messages.send` endpoint.

pub mod client;
pub mod mime;

pub use client::{GmailClient, GmailClientConfig, GmailError};
