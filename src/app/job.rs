//! The delayed execution job: sign, submit, confirm.
//!
//! A job runs once per created order and never reports back to the original
//! caller. Every failure is logged with the request id and swallowed at the
//! job boundary.

use chrono::Utc;
use serde_json::Value;
use solana_sdk::signature::Signature;
use tracing::{error, info, warn};

use crate::adapter::solana::sign_encoded;
use crate::app::state::ExecutionContext;
use crate::domain::RequestId;
use crate::error::Result;
use crate::exchange::{ConfirmationStatus, ExecuteRequest};

/// What a finished job observed.
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    /// Signature in slot 0 of the submitted transaction.
    pub signature: Signature,
    /// Raw execute response from the venue.
    pub response: Value,
    /// Confirmation status at the single poll, if the network knew it.
    pub status: Option<ConfirmationStatus>,
}

/// Terminal state of a job.
#[derive(Debug, Clone)]
pub enum JobOutcome {
    /// The venue accepted the signed transaction.
    Executed(ExecutionReport),
    /// Something failed; the reason has already been logged.
    Failed { reason: String },
}

impl JobOutcome {
    #[must_use]
    pub fn is_executed(&self) -> bool {
        matches!(self, Self::Executed(_))
    }
}

/// Run the job to completion, logging and swallowing any error.
pub async fn run(
    context: &ExecutionContext,
    transaction: &str,
    request_id: &RequestId,
) -> JobOutcome {
    match execute(context, transaction, request_id).await {
        Ok(report) => JobOutcome::Executed(report),
        Err(e) => {
            error!(
                at = %Utc::now().to_rfc3339(),
                request_id = %request_id,
                error = %e,
                "Execution error"
            );
            JobOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn execute(
    context: &ExecutionContext,
    transaction: &str,
    request_id: &RequestId,
) -> Result<ExecutionReport> {
    let signed = sign_encoded(transaction, context.keypair())?;
    if signed.signed_slots.is_empty() {
        warn!(
            request_id = %request_id,
            "Service key is not a required signer; submitting placeholders only"
        );
    }

    let request = ExecuteRequest {
        request_id: request_id.clone(),
        signed_transaction: signed.encoded,
    };
    let response = context.api().execute(&request).await?;
    info!(
        at = %Utc::now().to_rfc3339(),
        request_id = %request_id,
        venue = context.api().venue_name(),
        signature = %signed.signature,
        response = %response,
        "Executed order"
    );

    tokio::time::sleep(context.confirm_poll_interval()).await;
    let status = context.statuses().signature_status(&signed.signature).await?;
    info!(
        at = %Utc::now().to_rfc3339(),
        request_id = %request_id,
        signature = %signed.signature,
        status = %status.map_or_else(|| "unknown".to_string(), |s| s.to_string()),
        "Transaction status"
    );

    Ok(ExecutionReport {
        signature: signed.signature,
        response,
        status,
    })
}
