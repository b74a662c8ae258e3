//! backend_client - HTTP integration with the question-answering backend
//!
//! One fixed POST endpoint, one request/response shape. No retries and
//! no auth; the transport default timeout applies.

pub mod api;
pub mod client_trait;
pub mod error;

pub use api::client::HttpQueryClient;
pub use api::models::{QueryRequest, QueryResponse};
pub use client_trait::QueryClient;
pub use error::BackendError;
