//! Solana transaction signing and confirmation polling.

mod rpc;
mod signer;

pub use rpc::{RpcStatusClient, DEFAULT_RPC_URL};
pub use signer::{
    decode_transaction, encode_transaction, resolve_signers, sign_encoded, sign_transaction,
    SignedTransaction, SlotSigner,
};
