//! Answer post-processing
//!
//! The backend echoes the question before the answer, so the displayed
//! bot content is the raw reply with the first literal occurrence of
//! the query removed, trimmed of surrounding whitespace.

/// Shown when nothing is left of the reply once the echoed question is
/// stripped.
pub const EMPTY_ANSWER_FALLBACK: &str = "Sorry, I could not process your request.";

/// Shown when the backend request fails for any reason.
pub const BACKEND_ERROR_FALLBACK: &str = "Sorry, there was an error processing your request.";

/// Strip the echoed query from a raw backend reply.
///
/// Removes the first literal occurrence of `query` from `raw`, then
/// trims whitespace. Falls back to [`EMPTY_ANSWER_FALLBACK`] when the
/// result is empty.
///
/// This is a best-effort string operation, not semantic parsing: an
/// answer that genuinely contains the query text verbatim will lose
/// that occurrence too.
pub fn clean_answer(raw: &str, query: &str) -> String {
    let stripped = if query.is_empty() {
        raw.trim().to_string()
    } else {
        raw.replacen(query, "", 1).trim().to_string()
    };

    if stripped.is_empty() {
        EMPTY_ANSWER_FALLBACK.to_string()
    } else {
        stripped
    }
}
