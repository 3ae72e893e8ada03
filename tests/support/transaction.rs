//! Builders for unsigned venue transactions.

use solana_sdk::hash::Hash;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::message::{Message, VersionedMessage};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;
use trigger_scheduler::adapter::solana::{decode_transaction, encode_transaction};

/// Unsigned transaction requiring a signature from each of `signers`.
///
/// `signers[0]` is the fee payer and therefore always lands in slot 0.
pub fn unsigned(signers: &[Pubkey]) -> VersionedTransaction {
    let accounts = signers
        .iter()
        .map(|key| AccountMeta::new(*key, true))
        .collect();
    let instruction = Instruction::new_with_bytes(Pubkey::new_unique(), &[42], accounts);
    let message =
        Message::new_with_blockhash(&[instruction], Some(&signers[0]), &Hash::new_unique());

    VersionedTransaction {
        signatures: vec![Signature::default(); signers.len()],
        message: VersionedMessage::Legacy(message),
    }
}

/// Base64 form of [`unsigned`], as returned by createOrder.
pub fn unsigned_base64(signers: &[Pubkey]) -> String {
    encode_transaction(&unsigned(signers)).expect("encode transaction")
}

/// Slot index of `key` among the transaction's account keys.
pub fn slot_of(transaction: &VersionedTransaction, key: &Pubkey) -> usize {
    transaction
        .message
        .static_account_keys()
        .iter()
        .position(|k| k == key)
        .expect("key present in transaction")
}

/// Whether slot `slot` carries a valid signature from its account.
pub fn slot_verifies(transaction: &VersionedTransaction, slot: usize) -> bool {
    let key = transaction.message.static_account_keys()[slot];
    transaction.signatures[slot].verify(key.as_ref(), &transaction.message.serialize())
}

/// Decode a submitted base64 transaction.
pub fn decode(encoded: &str) -> VersionedTransaction {
    decode_transaction(encoded).expect("decode submitted transaction")
}
