//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use solana_sdk::signature::Keypair;

use crate::adapter::jupiter::JupiterClient;
use crate::adapter::solana::RpcStatusClient;
use crate::app::config::{Config, Credentials};
use crate::exchange::{SignatureStatusSource, TriggerApi};

/// Read-only context captured by every execution job.
pub struct ExecutionContext {
    keypair: Arc<Keypair>,
    api: Arc<dyn TriggerApi>,
    statuses: Arc<dyn SignatureStatusSource>,
    confirm_poll_interval: Duration,
}

impl ExecutionContext {
    #[must_use]
    pub fn new(
        keypair: Arc<Keypair>,
        api: Arc<dyn TriggerApi>,
        statuses: Arc<dyn SignatureStatusSource>,
        confirm_poll_interval: Duration,
    ) -> Self {
        Self {
            keypair,
            api,
            statuses,
            confirm_poll_interval,
        }
    }

    /// Signing keypair.
    #[must_use]
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    /// Venue client.
    #[must_use]
    pub fn api(&self) -> &Arc<dyn TriggerApi> {
        &self.api
    }

    /// Confirmation status source.
    #[must_use]
    pub fn statuses(&self) -> &dyn SignatureStatusSource {
        self.statuses.as_ref()
    }

    /// Wait before querying confirmation status.
    #[must_use]
    pub fn confirm_poll_interval(&self) -> Duration {
        self.confirm_poll_interval
    }
}

/// State shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    maker: String,
    compute_unit_price: String,
    execution: Arc<ExecutionContext>,
}

impl AppState {
    #[must_use]
    pub fn new(
        maker: impl Into<String>,
        compute_unit_price: impl Into<String>,
        execution: Arc<ExecutionContext>,
    ) -> Self {
        Self {
            maker: maker.into(),
            compute_unit_price: compute_unit_price.into(),
            execution,
        }
    }

    /// Wire the production Jupiter and Solana RPC clients.
    #[must_use]
    pub fn from_config(config: &Config, credentials: &Credentials) -> Self {
        let http = reqwest::Client::new();
        let api = Arc::new(JupiterClient::with_client(
            http.clone(),
            config.jupiter.api_url.clone(),
        ));
        let statuses = Arc::new(RpcStatusClient::with_client(
            http,
            config.solana.rpc_url.clone(),
        ));
        let execution = ExecutionContext::new(
            credentials.keypair(),
            api,
            statuses,
            config.solana.confirm_poll_interval(),
        );

        Self::new(
            credentials.public_key().to_string(),
            config.jupiter.compute_unit_price.clone(),
            Arc::new(execution),
        )
    }

    /// Maker and payer address.
    #[must_use]
    pub fn maker(&self) -> &str {
        &self.maker
    }

    #[must_use]
    pub fn compute_unit_price(&self) -> &str {
        &self.compute_unit_price
    }

    #[must_use]
    pub fn api(&self) -> &dyn TriggerApi {
        self.execution.api().as_ref()
    }

    #[must_use]
    pub fn execution(&self) -> &Arc<ExecutionContext> {
        &self.execution
    }
}
