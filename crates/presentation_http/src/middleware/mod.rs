//! HTTP middleware components

pub mod gate;

pub use gate::{AccessGate, AccessGateLayer, SESSION_COOKIE};
