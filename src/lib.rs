//! Trigger Scheduler - delayed trigger orders on Solana via Jupiter.
//!
//! The service accepts an order over HTTP, creates a trigger order through the
//! Jupiter Trigger API, and after a caller-chosen delay signs the returned
//! transaction and submits it for execution.
//!
//! # Modules
//!
//! - [`domain`] - Order validation and conversion to smallest token units
//! - [`exchange`] - Venue traits and wire types
//! - [`adapter`] - Jupiter REST client, Solana signing and RPC status lookups
//! - [`app`] - Configuration, shared state, HTTP routes and the execution job
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use trigger_scheduler::domain::{OrderAmounts, OrderRequest, Side};
//!
//! let request = OrderRequest {
//!     amount: dec!(100),
//!     side: Side::Buy,
//!     price: dec!(150),
//!     expiry_minutes: 1,
//!     after_minutes: 0,
//! };
//! let amounts = OrderAmounts::from_request(&request).unwrap();
//!
//! assert_eq!(amounts.making, 100_000_000);
//! assert_eq!(amounts.taking, 666_666_666);
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod exchange;
