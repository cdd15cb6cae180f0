//! HealthBuddy - Terminal Health Assistant
//!
//! A terminal front end for everyday health information: an AI chat
//! assistant backed by Gemini, a rule-based symptom checker, and static
//! catalogs of diseases, healthcare facilities, and wellness tips.
//!
//! # Architecture
//!
//! - `catalog`: compile-time data (symptoms, diseases, facilities, tips)
//! - `checker`: selection, rule table, classifier, and flow state machine
//! - `gemini` / `chat`: text-generation client and the transcript around it
//! - `capabilities` / `speech`: optional host features probed at startup
//! - `repl` / `cli`: the interactive and one-shot surfaces

pub mod errors;

pub mod app;
pub mod capabilities;
pub mod catalog;
pub mod chat;
pub mod checker;
pub mod cli;
pub mod config;
pub mod doctor;
pub mod gemini;
pub mod repl;
pub mod speech;

// Re-export commonly used types
pub use errors::{HealthError, Result};
