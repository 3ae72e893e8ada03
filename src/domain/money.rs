//! Monetary types and token unit scaling.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Price in USD per SOL, represented as a Decimal for precision.
pub type Price = Decimal;

/// Human-denominated token amount.
pub type Amount = Decimal;

/// Tokens the service trades between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// USD-pegged stablecoin.
    Usdc,
    /// Wrapped native SOL.
    Sol,
}

impl Token {
    /// Mint address of the token.
    #[must_use]
    pub const fn mint(self) -> &'static str {
        match self {
            Self::Usdc => "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            Self::Sol => "So11111111111111111111111111111111111111112",
        }
    }

    /// Number of decimals in the token's smallest unit.
    #[must_use]
    pub const fn decimals(self) -> u32 {
        match self {
            Self::Usdc => 6,
            Self::Sol => 9,
        }
    }

    /// Scale a human amount to smallest units, truncating toward zero.
    ///
    /// Returns `None` when the scaled value does not fit in a `u64` or is
    /// negative.
    #[must_use]
    pub fn to_base_units(self, amount: Amount) -> Option<u64> {
        let scale = Decimal::from(10u64.pow(self.decimals()));
        amount.checked_mul(scale)?.trunc().to_u64()
    }
}
