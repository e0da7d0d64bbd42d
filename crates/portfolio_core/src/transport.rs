use async_trait::async_trait;
use reqwest::Client;
use shared::{error::SubmissionError, protocol::ContactSubmission};

/// Delivers one contact submission to an endpoint.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn deliver(
        &self,
        endpoint: &str,
        submission: &ContactSubmission,
    ) -> Result<(), SubmissionError>;
}

/// JSON-over-HTTP transport. Any 2xx status is success; other statuses carry
/// the response text back as the rejection body.
#[derive(Debug, Clone, Default)]
pub struct HttpContactTransport {
    http: Client,
}

impl HttpContactTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn deliver(
        &self,
        endpoint: &str,
        submission: &ContactSubmission,
    ) -> Result<(), SubmissionError> {
        let response = self
            .http
            .post(endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|err| SubmissionError::transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "contact endpoint accepted submission");
            return Ok(());
        }

        // A body that cannot be read is treated as empty.
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body_len = body.len(), "contact endpoint rejected submission");
        Err(SubmissionError::rejected(status.as_u16(), body))
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
