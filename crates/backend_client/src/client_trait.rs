use async_trait::async_trait;

use crate::error::BackendError;

/// Single-call backend integration.
///
/// The session layer depends on this trait rather than on a concrete
/// client so tests can substitute a fake.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Ask the backend one question on behalf of one user and return
    /// the raw answer text (before any post-processing).
    async fn query(&self, query: &str, user_id: &str) -> Result<String, BackendError>;
}
