//! Conversion of human-denominated orders into smallest token units.

use rust_decimal::Decimal;

use super::error::ValidationError;
use super::money::Token;
use super::order::{OrderRequest, Side};

/// Making and taking amounts of an order, in smallest token units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAmounts {
    /// Token sold by the maker.
    pub input: Token,
    /// Token bought by the maker.
    pub output: Token,
    /// Amount of `input` offered.
    pub making: u64,
    /// Amount of `output` requested.
    pub taking: u64,
}

impl OrderAmounts {
    /// Convert an order request into token units.
    ///
    /// Buys spend `amount` USDC for `amount / price` SOL. Sells spend `amount`
    /// SOL for `amount * price` USDC. Decimal precision is kept until the
    /// final scaling, which truncates toward zero.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if amount or price is not positive, or a
    /// side of the order overflows or truncates to zero units.
    pub fn from_request(request: &OrderRequest) -> Result<Self, ValidationError> {
        ensure_positive("amount", request.amount)?;
        ensure_positive("price", request.price)?;

        let taking_value = match request.side {
            Side::Buy => request.amount.checked_div(request.price),
            Side::Sell => request.amount.checked_mul(request.price),
        }
        .ok_or(ValidationError::Overflow {
            field: "takingAmount",
        })?;

        let input = request.side.input_token();
        let output = request.side.output_token();

        Ok(Self {
            input,
            output,
            making: to_units(input, request.amount, "makingAmount")?,
            taking: to_units(output, taking_value, "takingAmount")?,
        })
    }
}

fn ensure_positive(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(())
}

fn to_units(token: Token, value: Decimal, field: &'static str) -> Result<u64, ValidationError> {
    match token.to_base_units(value) {
        Some(0) => Err(ValidationError::ZeroUnits { field }),
        Some(units) => Ok(units),
        None => Err(ValidationError::Overflow { field }),
    }
}
