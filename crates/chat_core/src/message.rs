//! Message types - A single transcript entry
//!
//! Messages are immutable once created; ordering is the append order
//! of the owning transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    /// Typed by the person driving the session.
    User,
    /// Produced by the backend (real answer or fallback text).
    Bot,
}

impl Author {
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }

    pub fn is_bot(&self) -> bool {
        matches!(self, Self::Bot)
    }
}

/// One entry in a session transcript.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Message text. Non-empty for user messages; bot messages may
    /// carry a fixed fallback string instead of a real answer.
    pub content: String,

    /// Who authored this message.
    pub author: Author,

    /// When the message was appended. Diagnostic only, never sent on
    /// the wire.
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: Author::User,
            sent_at: Utc::now(),
        }
    }

    /// Create a bot message.
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: Author::Bot,
            sent_at: Utc::now(),
        }
    }
}
