//! Jupiter Trigger API integration.

mod client;

pub use client::{JupiterClient, DEFAULT_TRIGGER_API_URL};
