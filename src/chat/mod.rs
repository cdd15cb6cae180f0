//! Chat feature: transcript, ordering policy, and reply fallback

pub mod session;

pub use session::{request_reply, request_reply_verbose, ChatMessage, ChatSession, MessageKind, Sender, GREETING};
