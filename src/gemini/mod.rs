//! Gemini generative-text integration

pub mod client;
pub mod prompt;
pub mod types;

pub use client::{ChatBackend, GeminiClient, FALLBACK_REPLY, MAX_OUTPUT_TOKENS};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
