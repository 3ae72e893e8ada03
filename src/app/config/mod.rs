//! Application configuration loading and validation.
//!
//! Configuration is loaded from an optional TOML file with environment
//! variable overrides. Wallet keys (`PUBLIC_KEY`, `PRIVATE_KEY`) only ever come
//! from the environment; `PORT` overrides the configured listen port.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};

// Submodules
mod jupiter;
mod logging;
mod server;
mod solana;
mod wallet;

// Re-export all public types from submodules
pub use jupiter::JupiterConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use server::{ServerConfig, DEFAULT_PORT};
pub use solana::SolanaConfig;
pub use wallet::{Credentials, WalletConfig};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub jupiter: JupiterConfig,
    #[serde(default)]
    pub solana: SolanaConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
}

impl Config {
    /// Load configuration from `path` and the process environment.
    ///
    /// A missing file is not an error; defaults are used instead.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Load configuration from `path`, reading variables through `env`.
    #[allow(clippy::result_large_err)]
    pub fn load_with_env<P, F>(path: P, env: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };

        config.apply_env(env)?;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML without touching the environment.
    #[allow(clippy::result_large_err)]
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    #[allow(clippy::result_large_err)]
    fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, env: F) -> Result<()> {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        // Keys come from the environment only, never from the config file
        self.wallet.public_key = non_empty("PUBLIC_KEY");
        self.wallet.private_key = non_empty("PRIVATE_KEY");

        if let Some(port) = non_empty("PORT") {
            self.server.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("'{port}': {e}"),
            })?;
        }

        Ok(())
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.jupiter.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        url::Url::parse(&self.jupiter.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "api_url",
            reason: e.to_string(),
        })?;
        if self.solana.rpc_url.is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        url::Url::parse(&self.solana.rpc_url).map_err(|e| ConfigError::InvalidValue {
            field: "rpc_url",
            reason: e.to_string(),
        })?;
        if self.solana.confirm_poll_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "confirm_poll_ms",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Decode the wallet credentials.
    ///
    /// # Errors
    ///
    /// Fails if `PUBLIC_KEY` or `PRIVATE_KEY` is missing or malformed.
    #[allow(clippy::result_large_err)]
    pub fn credentials(&self) -> Result<Credentials> {
        Credentials::from_wallet(&self.wallet)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        if !self.logging.init() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}
