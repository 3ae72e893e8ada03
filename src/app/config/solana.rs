//! Solana RPC configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::solana::DEFAULT_RPC_URL;

/// Solana RPC configuration used for confirmation polling.
#[derive(Debug, Clone, Deserialize)]
pub struct SolanaConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Wait before the single confirmation query, in milliseconds.
    #[serde(default = "default_confirm_poll_ms")]
    pub confirm_poll_ms: u64,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.into()
}

const fn default_confirm_poll_ms() -> u64 {
    500
}

impl SolanaConfig {
    #[must_use]
    pub fn confirm_poll_interval(&self) -> Duration {
        Duration::from_millis(self.confirm_poll_ms)
    }
}

impl Default for SolanaConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            confirm_poll_ms: default_confirm_poll_ms(),
        }
    }
}
