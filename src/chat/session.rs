//! Chat transcript and ordering policy
//!
//! The transcript is append-only. Replies are appended at the moment they
//! arrive (append-on-arrival): a slow response landing after the user has
//! sent further messages is appended then, never reordered and never
//! discarded.

use crate::gemini::{ChatBackend, FALLBACK_REPLY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Rough topic tag carried for display purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    General,
    Symptom,
    Disease,
    Location,
}

/// One transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
}

impl ChatMessage {
    fn new(text: String, sender: Sender, kind: MessageKind) -> Self {
        ChatMessage {
            id: Uuid::new_v4(),
            text,
            sender,
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// Greeting shown when a session opens
pub const GREETING: &str = "Hello! I'm your AI Health Assistant. I can help you with disease \
information, symptom checking, and finding nearby healthcare facilities. How can I assist you today?";

/// In-memory chat transcript
///
/// Not persisted; lives only as long as the session.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a session with the fixed greeting
    pub fn new() -> Self {
        ChatSession {
            messages: vec![ChatMessage::new(
                GREETING.to_string(),
                Sender::Bot,
                MessageKind::General,
            )],
        }
    }

    /// Append a user message
    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage::new(
            text.to_string(),
            Sender::User,
            MessageKind::General,
        ));
    }

    /// Append a bot reply at arrival time
    pub fn push_bot(&mut self, text: &str) {
        self.push_bot_kind(text, MessageKind::General);
    }

    /// Append a bot reply with an explicit topic tag
    pub fn push_bot_kind(&mut self, text: &str, kind: MessageKind) {
        self.messages
            .push(ChatMessage::new(text.to_string(), Sender::Bot, kind));
    }

    /// Full transcript in append order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages including the greeting
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Send one user message through a backend and return the reply text.
///
/// Any backend failure is recovered locally with the fixed fallback reply;
/// errors never propagate past this point.
pub async fn request_reply(backend: Arc<dyn ChatBackend>, message: &str) -> String {
    match backend.reply(message).await {
        Ok(text) => text,
        Err(_) => FALLBACK_REPLY.to_string(),
    }
}

/// Variant that surfaces the error alongside the fallback, for callers that
/// want to log it.
pub async fn request_reply_verbose(
    backend: Arc<dyn ChatBackend>,
    message: &str,
) -> (String, Option<String>) {
    match backend.reply(message).await {
        Ok(text) => (text, None),
        Err(e) => (FALLBACK_REPLY.to_string(), Some(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HealthError;
    use async_trait::async_trait;

    struct EchoBackend;

    #[async_trait]
    impl ChatBackend for EchoBackend {
        async fn reply(&self, message: &str) -> crate::errors::Result<String> {
            Ok(format!("echo: {}", message))
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl ChatBackend for FailingBackend {
        async fn reply(&self, _message: &str) -> crate::errors::Result<String> {
            Err(HealthError::GeminiApiError("boom".to_string()))
        }
    }

    #[test]
    fn test_session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert!(session.messages()[0].text.contains("AI Health Assistant"));
    }

    #[test]
    fn test_messages_append_in_order() {
        let mut session = ChatSession::new();
        session.push_user("first");
        session.push_bot("reply to first");
        session.push_user("second");

        let texts: Vec<&str> = session.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[1..], ["first", "reply to first", "second"]);
    }

    #[test]
    fn test_message_ids_unique() {
        let mut session = ChatSession::new();
        session.push_user("a");
        session.push_user("b");
        let ids: Vec<Uuid> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 3);
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
    }

    #[tokio::test]
    async fn test_request_reply_success() {
        let backend = Arc::new(EchoBackend);
        let reply = request_reply(backend, "hello").await;
        assert_eq!(reply, "echo: hello");
    }

    #[tokio::test]
    async fn test_request_reply_fallback_on_failure() {
        let backend = Arc::new(FailingBackend);
        let reply = request_reply(backend, "hello").await;
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_request_reply_verbose_surfaces_error() {
        let backend = Arc::new(FailingBackend);
        let (reply, error) = request_reply_verbose(backend, "hello").await;
        assert_eq!(reply, FALLBACK_REPLY);
        assert!(error.unwrap().contains("boom"));
    }
}
