//! AI Core - Chat completion engine
//!
//! Provides abstractions for LLM completion against an OpenAI-compatible API
//! (Groq by default), used by the draft generation pipeline.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::OpenAiChatEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse};
