//! Order domain logic: request validation and token unit conversion.

pub mod error;

mod conversion;
mod id;
mod money;
mod order;

pub use conversion::OrderAmounts;
pub use error::ValidationError;
pub use id::RequestId;
pub use money::{Amount, Price, Token};
pub use order::{OrderRequest, Side, DEFAULT_AFTER_MINUTES, DEFAULT_EXPIRY_MINUTES};
