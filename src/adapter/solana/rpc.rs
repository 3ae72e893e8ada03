//! Minimal Solana JSON-RPC client for signature status lookups.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use solana_sdk::signature::Signature;
use tracing::debug;

use crate::error::Error;
use crate::exchange::{ConfirmationStatus, SignatureStatusSource};

/// Public mainnet-beta RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignatureStatus {
    confirmation_status: Option<ConfirmationStatus>,
}

type SignatureStatuses = WithContext<Vec<Option<SignatureStatus>>>;

/// JSON-RPC client for `getSignatureStatuses`.
pub struct RpcStatusClient {
    client: Client,
    rpc_url: String,
}

impl RpcStatusClient {
    #[must_use]
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), rpc_url)
    }

    #[must_use]
    pub fn with_client(client: Client, rpc_url: impl Into<String>) -> Self {
        Self {
            client,
            rpc_url: rpc_url.into(),
        }
    }
}

fn status_from_response(
    response: RpcResponse<SignatureStatuses>,
) -> Result<Option<ConfirmationStatus>, Error> {
    if let Some(err) = response.error {
        return Err(Error::Rpc(format!("{} (code {})", err.message, err.code)));
    }

    let statuses = response
        .result
        .ok_or_else(|| Error::Rpc("response has neither result nor error".into()))?;

    Ok(statuses
        .value
        .into_iter()
        .next()
        .flatten()
        .and_then(|status| status.confirmation_status))
}

#[async_trait]
impl SignatureStatusSource for RpcStatusClient {
    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<ConfirmationStatus>, Error> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getSignatureStatuses",
            "params": [[signature.to_string()], {"searchTransactionHistory": false}],
        });

        debug!(signature = %signature, rpc_url = %self.rpc_url, "Querying signature status");

        let response: RpcResponse<SignatureStatuses> = self
            .client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        status_from_response(response)
    }
}
