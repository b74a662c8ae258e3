//! Session controller - Owns all mutable session state
//!
//! The controller is pure state-transition logic: it validates and
//! mutates local state and tells the caller what (if anything) to send
//! to the backend. It never performs the HTTP call itself, so it is
//! fully unit-testable without network mocking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use chat_core::Transcript;

use super::states::SessionPhase;

/// The payload the caller should hand to the backend client after a
/// successful [`SessionController::begin_send`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OutboundQuery {
    /// Trimmed user text.
    pub query: String,
    /// Identity captured at the start gate.
    pub user_id: String,
}

/// State machine for one chat session.
///
/// Precondition failures are silent no-ops reported through return
/// values: the user fixes the input and retries, no error escapes.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SessionController {
    /// Current lifecycle phase.
    phase: SessionPhase,
    /// Identity string; empty until the start gate is passed,
    /// immutable afterwards.
    user_id: String,
    /// Append-only log of exchanged messages.
    transcript: Transcript,
    /// Current unsent text; cleared the moment a send is initiated.
    pending_input: String,
}

impl SessionController {
    /// Create a controller in the `Unstarted` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current phase.
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Get the captured user id (empty while `Unstarted`).
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Get the transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Get the current unsent input text.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Pass the start gate with a free-form id.
    ///
    /// Empty or whitespace-only ids are ignored, as are repeat calls
    /// once the session is `Active`. Returns whether the session
    /// transitioned. Never contacts the backend.
    pub fn start_chat(&mut self, raw_id: &str) -> bool {
        if self.phase.is_active() {
            debug!("start_chat ignored: session already active");
            return false;
        }

        let trimmed = raw_id.trim();
        if trimmed.is_empty() {
            debug!("start_chat ignored: empty user id");
            return false;
        }

        self.user_id = trimmed.to_string();
        self.phase = SessionPhase::Active {
            awaiting_response: false,
        };
        debug!(user_id = %self.user_id, "session started");
        true
    }

    /// Replace the pending input verbatim (no trimming, no
    /// validation). Ignored while `Unstarted`.
    pub fn update_input(&mut self, text: impl Into<String>) {
        if !self.phase.is_active() {
            debug!("update_input ignored: session not started");
            return;
        }
        self.pending_input = text.into();
    }

    /// Initiate a send cycle.
    ///
    /// Preconditions: session is `Active`, the trimmed pending input
    /// is non-empty, and no request is already in flight. On failure
    /// returns `None` with no state change.
    ///
    /// On success, in order: appends a user message with the untrimmed
    /// pending input, clears the pending input, marks the session
    /// awaiting, and returns the query for the caller to dispatch.
    pub fn begin_send(&mut self) -> Option<OutboundQuery> {
        if !self.phase.accepts_user_input() {
            debug!(phase = ?self.phase, "begin_send rejected: not accepting input");
            return None;
        }

        let query = self.pending_input.trim().to_string();
        if query.is_empty() {
            debug!("begin_send rejected: empty input");
            return None;
        }

        self.transcript.push_user(std::mem::take(&mut self.pending_input));
        self.phase = SessionPhase::Active {
            awaiting_response: true,
        };

        Some(OutboundQuery {
            query,
            user_id: self.user_id.clone(),
        })
    }

    /// Fold the resolution of the in-flight cycle back into the
    /// transcript.
    ///
    /// `bot_content` is the already post-processed answer, or the
    /// error fallback text when the request failed. Appends exactly
    /// one bot message and clears the awaiting flag. A resolution
    /// arriving when nothing is in flight (late or duplicate) is
    /// discarded; returns whether the resolution was applied.
    pub fn resolve_send(&mut self, bot_content: impl Into<String>) -> bool {
        if !self.phase.is_awaiting_response() {
            debug!("resolve_send discarded: no request in flight");
            return false;
        }

        self.transcript.push_bot(bot_content);
        self.phase = SessionPhase::Active {
            awaiting_response: false,
        };
        true
    }
}
