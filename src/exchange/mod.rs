//! Trigger-order venue abstraction.
//!
//! Defines the traits the order handler and execution job depend on, along
//! with the wire types exchanged with the venue.

mod traits;
mod types;

pub use traits::{SignatureStatusSource, TriggerApi};
pub use types::{
    ConfirmationStatus, CreateOrderParams, CreateOrderPayload, CreatedOrder, ExecuteRequest,
    COMPUTE_UNIT_PRICE_AUTO,
};
