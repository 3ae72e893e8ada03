//! Jupiter Trigger API configuration.

use serde::Deserialize;

use crate::adapter::jupiter::DEFAULT_TRIGGER_API_URL;
use crate::exchange::COMPUTE_UNIT_PRICE_AUTO;

/// Jupiter Trigger API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JupiterConfig {
    /// Base URL; `createOrder` and `execute` are resolved against it.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Priority fee policy sent with every order.
    #[serde(default = "default_compute_unit_price")]
    pub compute_unit_price: String,
}

fn default_api_url() -> String {
    DEFAULT_TRIGGER_API_URL.into()
}

fn default_compute_unit_price() -> String {
    COMPUTE_UNIT_PRICE_AUTO.into()
}

impl Default for JupiterConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            compute_unit_price: default_compute_unit_price(),
        }
    }
}
