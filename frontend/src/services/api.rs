use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{DataTransport, SubmissionPayload, TransportResponse, DATA_ENDPOINT};

/// API client for the data service on the page's own origin
#[derive(Clone, Default, PartialEq)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl DataTransport for ApiClient {
    async fn post_data(&self, payload: &SubmissionPayload) -> Result<TransportResponse, String> {
        let response = Request::post(DATA_ENDPOINT)
            .json(payload)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))?;

        Ok(TransportResponse { status, body })
    }
}
