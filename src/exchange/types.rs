//! Wire types exchanged with the trigger-order venue.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{OrderAmounts, RequestId};
use crate::error::CreateOrderError;

/// Compute-unit price policy letting the venue pick the priority fee.
pub const COMPUTE_UNIT_PRICE_AUTO: &str = "auto";

/// Body of a create-order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub input_mint: String,
    pub output_mint: String,
    pub maker: String,
    pub payer: String,
    pub params: CreateOrderParams,
    pub compute_unit_price: String,
    /// Unix timestamp, string-encoded.
    pub expired_at: String,
}

/// Making/taking amounts in smallest token units, string-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderParams {
    pub making_amount: String,
    pub taking_amount: String,
}

impl CreateOrderPayload {
    /// Build the payload for an order where `maker` both offers funds and
    /// pays fees.
    #[must_use]
    pub fn new(
        amounts: &OrderAmounts,
        maker: &str,
        compute_unit_price: &str,
        expired_at: i64,
    ) -> Self {
        Self {
            input_mint: amounts.input.mint().to_string(),
            output_mint: amounts.output.mint().to_string(),
            maker: maker.to_string(),
            payer: maker.to_string(),
            params: CreateOrderParams {
                making_amount: amounts.making.to_string(),
                taking_amount: amounts.taking.to_string(),
            },
            compute_unit_price: compute_unit_price.to_string(),
            expired_at: expired_at.to_string(),
        }
    }
}

/// The parts of a create-order response needed to execute the order later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedOrder {
    /// Unsigned transaction, base64-encoded.
    pub transaction: String,
    pub request_id: RequestId,
}

impl CreatedOrder {
    /// Extract the transaction and request id from a create-order response.
    ///
    /// The venue has used both `tx`/`transaction` and `requestId`/`id`; the
    /// first non-empty value of each pair wins. Ids may also be numbers.
    ///
    /// # Errors
    ///
    /// Returns [`CreateOrderError::Incomplete`] carrying the raw response if
    /// either value is missing.
    pub fn from_response(response: &Value) -> Result<Self, CreateOrderError> {
        let transaction = first_non_empty(response, &["tx", "transaction"]);
        let request_id = first_id(response, &["requestId", "id"]);

        match (transaction, request_id) {
            (Some(transaction), Some(request_id)) => Ok(Self {
                transaction: transaction.to_string(),
                request_id: RequestId::new(request_id),
            }),
            _ => Err(CreateOrderError::Incomplete {
                response: response.clone(),
            }),
        }
    }
}

fn first_non_empty<'a>(response: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| response.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
}

/// Like [`first_non_empty`], but numeric ids other than zero are accepted too.
fn first_id(response: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match response.get(*key)? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) if id.as_f64() != Some(0.0) => Some(id.to_string()),
        _ => None,
    })
}

/// Body of an execute request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    pub request_id: RequestId,
    /// Signed transaction, base64-encoded.
    pub signed_transaction: String,
}

/// Commitment level a transaction has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStatus {
    Processed,
    Confirmed,
    Finalized,
}

impl fmt::Display for ConfirmationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processed => write!(f, "processed"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Finalized => write!(f, "finalized"),
        }
    }
}
