//! chat_session - Drives one chat session end to end
//!
//! Composes the pure session state machine (`chat_state`) with a
//! backend client (`backend_client`) and a cancellation token so that
//! a reply arriving after teardown is discarded instead of written
//! into dead state.

pub mod session;

pub use session::{ChatSession, SendOutcome};
