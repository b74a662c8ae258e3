//! chat_state - Session state machine for the chat client
//!
//! This crate provides the pure state-transition logic for one chat
//! session: the start-of-chat gate, the send/receive cycle gating, and
//! transcript accumulation. It performs no I/O; the backend call is
//! composed in by a higher layer.

pub mod machine;

// Re-export commonly used types
pub use machine::{OutboundQuery, SessionController, SessionPhase};
