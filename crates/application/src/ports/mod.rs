//! Port definitions for the application layer
//!
//! Implemented by adapters in the infrastructure layer.

mod draft_generator;
mod email_sender;

pub use draft_generator::{DraftGeneratorPort, DraftRequest, GeneratorError};
pub use email_sender::{EmailSenderPort, SenderError};
