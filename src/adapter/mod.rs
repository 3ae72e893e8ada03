//! Implementations of the venue and network traits.

pub mod jupiter;
pub mod solana;
