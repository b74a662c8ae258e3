//! State machine module
//!
//! Contains the session lifecycle state and the controller that owns
//! all mutable session state.

mod controller;
mod states;

pub use controller::{OutboundQuery, SessionController};
pub use states::SessionPhase;
