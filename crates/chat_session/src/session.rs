//! ChatSession - One full send/receive cycle against a real client
//!
//! The state machine stays pure; this layer owns the single suspension
//! point (the backend call) and folds its resolution back into the
//! controller. `send_message` takes `&mut self`, so a session can
//! never have two calls in flight structurally, on top of the
//! controller's own awaiting gate.

use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use uuid::Uuid;

use backend_client::QueryClient;
use chat_core::{clean_answer, Message, Transcript, BACKEND_ERROR_FALLBACK};
use chat_state::{SessionController, SessionPhase};

/// How a `send_message` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The cycle ran to resolution; the transcript grew by one user
    /// and one bot message.
    Completed,
    /// Preconditions were unmet (empty input or a send already in
    /// flight); nothing changed.
    Rejected,
    /// The session was torn down before the backend resolved; the
    /// resolution was discarded.
    Cancelled,
}

/// The lifetime of one user's chat interaction, from identity entry to
/// teardown.
pub struct ChatSession<C: QueryClient> {
    /// Diagnostic id for log correlation.
    id: Uuid,
    controller: SessionController,
    client: C,
    cancel_token: CancellationToken,
}

impl<C: QueryClient> ChatSession<C> {
    pub fn new(client: C) -> Self {
        Self {
            id: Uuid::new_v4(),
            controller: SessionController::new(),
            client,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> &SessionPhase {
        self.controller.phase()
    }

    pub fn user_id(&self) -> &str {
        self.controller.user_id()
    }

    pub fn transcript(&self) -> &Transcript {
        self.controller.transcript()
    }

    pub fn pending_input(&self) -> &str {
        self.controller.pending_input()
    }

    /// Pass the start gate. See [`SessionController::start_chat`].
    pub fn start_chat(&mut self, raw_id: &str) -> bool {
        self.controller.start_chat(raw_id)
    }

    /// Replace the pending input verbatim.
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.controller.update_input(text);
    }

    /// A clone of the session's cancellation token, for the surface
    /// that owns teardown.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Tear the session down. Any in-flight resolution is discarded.
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    /// Run one send/receive cycle.
    ///
    /// Initiates the send through the controller (which appends the
    /// user message and clears the input immediately), awaits the
    /// backend, and folds the resolution into the transcript: the
    /// cleaned answer on success, [`BACKEND_ERROR_FALLBACK`] on any
    /// failure. Failure detail goes to the log only; the session stays
    /// sendable either way.
    pub async fn send_message(&mut self) -> SendOutcome {
        if self.cancel_token.is_cancelled() {
            debug!(session_id = %self.id, "send ignored: session torn down");
            return SendOutcome::Cancelled;
        }

        let Some(outbound) = self.controller.begin_send() else {
            return SendOutcome::Rejected;
        };

        let result = tokio::select! {
            _ = self.cancel_token.cancelled() => {
                debug!(session_id = %self.id, "torn down mid-flight, discarding resolution");
                return SendOutcome::Cancelled;
            }
            result = self.client.query(&outbound.query, &outbound.user_id) => result,
        };

        let bot_content = match result {
            Ok(raw) => clean_answer(&raw, &outbound.query),
            Err(err) => {
                error!(session_id = %self.id, error = %err, "backend request failed");
                BACKEND_ERROR_FALLBACK.to_string()
            }
        };

        self.controller.resolve_send(bot_content);
        SendOutcome::Completed
    }

    /// The most recent bot message, if any. Convenience for surfaces
    /// that render incrementally.
    pub fn last_bot_message(&self) -> Option<&Message> {
        self.transcript()
            .iter()
            .rev()
            .find(|message| message.author.is_bot())
    }
}
