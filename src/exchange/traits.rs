//! Venue and network trait definitions.
//!
//! These traits define the interface the service needs from the aggregator
//! and from the Solana RPC node.

use async_trait::async_trait;
use serde_json::Value;
use solana_sdk::signature::Signature;

use super::types::{ConfirmationStatus, CreateOrderPayload, ExecuteRequest};
use crate::error::Error;

/// Client for the aggregator's trigger-order endpoints.
#[async_trait]
pub trait TriggerApi: Send + Sync {
    /// Create a trigger order and return the raw response body.
    ///
    /// Implementations return an error for transport failures and non-success
    /// statuses; extracting the transaction and request id is left to the
    /// caller via [`CreatedOrder::from_response`](super::CreatedOrder::from_response).
    async fn create_order(&self, payload: &CreateOrderPayload) -> Result<Value, Error>;

    /// Submit a signed transaction for a previously created order.
    async fn execute(&self, request: &ExecuteRequest) -> Result<Value, Error>;

    /// Venue name for logging/debugging.
    fn venue_name(&self) -> &'static str;
}

/// Source of transaction confirmation status.
#[async_trait]
pub trait SignatureStatusSource: Send + Sync {
    /// Look up the confirmation status of a transaction signature.
    ///
    /// Returns `Ok(None)` when the network does not know the signature yet.
    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<ConfirmationStatus>, Error>;
}
