//! Session phases - Defines the possible states of a chat session
//!
//! The in-flight flag lives inside the `Active` variant so that
//! illegal combinations (awaiting a response while unstarted) are
//! unrepresentable.

use serde::{Deserialize, Serialize};

/// Defines the possible states of a session's lifecycle.
///
/// A session moves `Unstarted -> Active` exactly once and never
/// reverts; there is no terminal state, the session stays `Active`
/// until the surrounding surface is torn down.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No identity captured yet; only the start gate is available.
    Unstarted,

    /// Identity captured; the session exchanges messages.
    Active {
        /// Whether a backend request is currently in flight.
        awaiting_response: bool,
    },
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::Unstarted
    }
}

impl SessionPhase {
    /// Check if the start gate has been passed.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Check if a backend request is in flight.
    pub fn is_awaiting_response(&self) -> bool {
        matches!(
            self,
            Self::Active {
                awaiting_response: true
            }
        )
    }

    /// Check if this state allows initiating a new send.
    pub fn accepts_user_input(&self) -> bool {
        matches!(
            self,
            Self::Active {
                awaiting_response: false
            }
        )
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Unstarted => "Waiting for a user id",
            Self::Active {
                awaiting_response: true,
            } => "Waiting for the backend reply",
            Self::Active {
                awaiting_response: false,
            } => "Ready for input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_unstarted() {
        assert_eq!(SessionPhase::default(), SessionPhase::Unstarted);
    }

    #[test]
    fn test_awaiting_detection() {
        let awaiting = SessionPhase::Active {
            awaiting_response: true,
        };
        let idle = SessionPhase::Active {
            awaiting_response: false,
        };
        assert!(awaiting.is_awaiting_response());
        assert!(!awaiting.accepts_user_input());
        assert!(idle.accepts_user_input());
        assert!(!SessionPhase::Unstarted.is_awaiting_response());
        assert!(!SessionPhase::Unstarted.accepts_user_input());
    }
}
