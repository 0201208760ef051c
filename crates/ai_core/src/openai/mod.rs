//! OpenAI-compatible completion backend

mod client;

pub use client::OpenAiChatEngine;
