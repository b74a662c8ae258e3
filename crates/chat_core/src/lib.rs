//! chat_core - Core types for the single-session chat client
//!
//! This crate provides the foundational types used across the chat crates:
//! - `message` - Message and author types
//! - `transcript` - Append-only message log
//! - `answer` - Post-processing of raw backend replies

pub mod answer;
pub mod message;
pub mod transcript;

// Re-export commonly used types
pub use answer::{clean_answer, BACKEND_ERROR_FALLBACK, EMPTY_ANSWER_FALLBACK};
pub use message::{Author, Message};
pub use transcript::Transcript;
