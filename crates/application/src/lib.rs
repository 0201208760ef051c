//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions for the two external collaborators (draft
//! generator and mail sender), the services validating input before any
//! upstream call, and the wizard session driving the domain state machine.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
