//! Jupiter Trigger API REST client.
//!
//! Provides HTTP client functionality for creating trigger orders and
//! submitting their signed transactions.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CreateOrderError, Error, ExecutionError};
use crate::exchange::{CreateOrderPayload, ExecuteRequest, TriggerApi};

/// Production base URL of the Trigger API.
pub const DEFAULT_TRIGGER_API_URL: &str = "https://api.jup.ag/trigger/v1";

/// HTTP client for the Jupiter Trigger API.
pub struct JupiterClient {
    client: Client,
    base_url: String,
}

impl JupiterClient {
    /// Create a new client with the given base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL for the Trigger API
    ///   (e.g., `https://api.jup.ag/trigger/v1`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client that reuses an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl TriggerApi for JupiterClient {
    async fn create_order(&self, payload: &CreateOrderPayload) -> Result<Value, Error> {
        let url = self.endpoint("createOrder");
        info!(
            url = %url,
            input_mint = %payload.input_mint,
            making_amount = %payload.params.making_amount,
            taking_amount = %payload.params.taking_amount,
            expired_at = %payload.expired_at,
            "Creating trigger order"
        );

        let response = self.client.post(&url).json(payload).send().await?;
        let body = create_order_body(response).await?;
        debug!(response = %body, "createOrder response");
        Ok(body)
    }

    async fn execute(&self, request: &ExecuteRequest) -> Result<Value, Error> {
        let url = self.endpoint("execute");
        info!(url = %url, request_id = %request.request_id, "Submitting signed transaction");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ExecutionError::SubmissionFailed(e.to_string()))?;

        execute_body(response).await
    }

    fn venue_name(&self) -> &'static str {
        "Jupiter"
    }
}

/// Read a createOrder response, mapping non-success statuses to
/// [`CreateOrderError::Status`] with the body echoed.
async fn create_order_body(response: Response) -> Result<Value, Error> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CreateOrderError::Status {
            status: status.as_u16(),
            body,
        }
        .into());
    }

    Ok(response.json().await?)
}

/// Read an execute response, mapping non-success statuses to
/// [`ExecutionError::Rejected`].
async fn execute_body(response: Response) -> Result<Value, Error> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ExecutionError::Rejected {
            status: status.as_u16(),
            body,
        }
        .into());
    }

    Ok(response.json().await?)
}
