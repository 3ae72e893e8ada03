#![allow(dead_code)]

pub mod transaction;
pub mod venue;

use std::sync::Arc;
use std::time::Duration;

use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use trigger_scheduler::app::{AppState, ExecutionContext};

use venue::{MockStatuses, MockTriggerApi};

/// Wire mocks into an [`ExecutionContext`] with a negligible confirmation wait.
pub fn execution_context(
    keypair: &Arc<Keypair>,
    api: &Arc<MockTriggerApi>,
    statuses: &Arc<MockStatuses>,
) -> Arc<ExecutionContext> {
    Arc::new(ExecutionContext::new(
        Arc::clone(keypair),
        api.clone(),
        statuses.clone(),
        Duration::from_millis(1),
    ))
}

/// Handler state whose maker is the keypair's own address.
pub fn app_state(
    keypair: &Arc<Keypair>,
    api: &Arc<MockTriggerApi>,
    statuses: &Arc<MockStatuses>,
) -> AppState {
    AppState::new(
        keypair.pubkey().to_string(),
        "auto",
        execution_context(keypair, api, statuses),
    )
}
