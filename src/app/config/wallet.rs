//! Wallet credentials for order creation and signing.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

use crate::error::{ConfigError, Result};

/// Wallet configuration.
///
/// Keys are loaded from the `PUBLIC_KEY` and `PRIVATE_KEY` env vars at runtime
/// (never from the config file).
#[derive(Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Maker and payer address.
    #[serde(skip)]
    pub public_key: Option<String>,
    /// Base58-encoded 64-byte keypair.
    #[serde(skip)]
    pub private_key: Option<String>,
}

impl fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletConfig")
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Decoded wallet credentials, shared read-only by the handler and every job.
#[derive(Clone)]
pub struct Credentials {
    public_key: Pubkey,
    keypair: Arc<Keypair>,
}

impl Credentials {
    /// Decode the wallet's keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if either key is absent and
    /// [`ConfigError::InvalidValue`] if either fails to decode.
    #[allow(clippy::result_large_err)]
    pub fn from_wallet(wallet: &WalletConfig) -> Result<Self> {
        let public_key = wallet.public_key.as_deref().ok_or(ConfigError::MissingField {
            field: "PUBLIC_KEY",
        })?;
        let private_key = wallet.private_key.as_deref().ok_or(ConfigError::MissingField {
            field: "PRIVATE_KEY",
        })?;

        let public_key = Pubkey::from_str(public_key.trim()).map_err(|e| ConfigError::InvalidValue {
            field: "PUBLIC_KEY",
            reason: e.to_string(),
        })?;

        Ok(Self {
            public_key,
            keypair: Arc::new(decode_keypair(private_key)?),
        })
    }

    /// Build credentials directly from a keypair, using its own address as maker.
    #[must_use]
    pub fn from_keypair(keypair: Keypair) -> Self {
        Self {
            public_key: keypair.pubkey(),
            keypair: Arc::new(keypair),
        }
    }

    /// Maker and payer address sent with every order.
    #[must_use]
    pub fn public_key(&self) -> &Pubkey {
        &self.public_key
    }

    /// Signing keypair.
    #[must_use]
    pub fn keypair(&self) -> Arc<Keypair> {
        Arc::clone(&self.keypair)
    }

    /// Whether the configured address is the keypair's own address.
    #[must_use]
    pub fn keys_match(&self) -> bool {
        self.keypair.pubkey() == self.public_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("signer", &self.keypair.pubkey())
            .finish()
    }
}

fn decode_keypair(encoded: &str) -> Result<Keypair> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        field: "PRIVATE_KEY",
        reason,
    };

    let bytes = bs58::decode(encoded.trim())
        .into_vec()
        .map_err(|e| invalid(format!("not base58: {e}")))?;
    if bytes.len() != 64 {
        return Err(invalid(format!("expected 64 bytes, got {}", bytes.len())).into());
    }

    Keypair::from_bytes(&bytes).map_err(|e| invalid(e.to_string()).into())
}
