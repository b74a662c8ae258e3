use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;

use crate::api::models::{QueryRequest, QueryResponse};
use crate::client_trait::QueryClient;
use crate::error::BackendError;

/// reqwest-backed [`QueryClient`].
///
/// Holds one connection pool for the life of the session. The
/// endpoint is fixed at construction; where it comes from (flag, env)
/// is the caller's concern.
#[derive(Debug, Clone)]
pub struct HttpQueryClient {
    client: Client,
    endpoint: String,
}

impl HttpQueryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryClient for HttpQueryClient {
    async fn query(&self, query: &str, user_id: &str) -> Result<String, BackendError> {
        let request = QueryRequest {
            query: query.to_string(),
            user_id: user_id.to_string(),
        };

        debug!("POST {} for user {}", self.endpoint, user_id);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("failed to reach backend: {e}");
                BackendError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("backend returned status {status}");
            return Err(BackendError::Status { status });
        }

        let body: QueryResponse = response.json().await.map_err(|e| {
            error!("failed to parse backend response: {e}");
            BackendError::MalformedBody(e.to_string())
        })?;

        Ok(body.response)
    }
}
