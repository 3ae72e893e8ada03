//! Multi-signer transaction signing.
//!
//! Transactions built by the venue may require signatures from accounts the
//! service holds no key for. Each required-signature slot is paired with
//! either the service keypair or a placeholder signer, in slot order, and the
//! whole list is handed to a single signing call. Placeholder slots end up
//! with the default (all-zero) signature.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use solana_sdk::message::VersionedMessage;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::null_signer::NullSigner;
use solana_sdk::signer::{Signer, SignerError};
use solana_sdk::transaction::VersionedTransaction;

use crate::error::ExecutionError;

/// Signer for one required-signature slot.
pub enum SlotSigner<'a> {
    /// The service's own keypair.
    Keypair(&'a Keypair),
    /// An account whose signature is supplied elsewhere.
    Placeholder(NullSigner),
}

impl SlotSigner<'_> {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

impl Signer for SlotSigner<'_> {
    fn try_pubkey(&self) -> Result<Pubkey, SignerError> {
        match self {
            Self::Keypair(keypair) => keypair.try_pubkey(),
            Self::Placeholder(signer) => signer.try_pubkey(),
        }
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        match self {
            Self::Keypair(keypair) => keypair.try_sign_message(message),
            Self::Placeholder(signer) => signer.try_sign_message(message),
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// A signed transaction ready for submission.
pub struct SignedTransaction {
    pub transaction: VersionedTransaction,
    /// Wire bytes, base64-encoded.
    pub encoded: String,
    /// Signature in slot 0, which identifies the transaction on-chain.
    pub signature: Signature,
    /// Slots signed with the service keypair.
    pub signed_slots: Vec<usize>,
}

/// Pair every required-signature account with its signer, in slot order.
///
/// # Errors
///
/// Returns [`ExecutionError::Decode`] if the message declares more required
/// signatures than it has account keys.
pub fn resolve_signers<'a>(
    message: &VersionedMessage,
    keypair: &'a Keypair,
) -> Result<Vec<SlotSigner<'a>>, ExecutionError> {
    let required = usize::from(message.header().num_required_signatures);
    let keys = message.static_account_keys();
    if keys.len() < required {
        return Err(ExecutionError::Decode(format!(
            "message requires {required} signatures but has {} account keys",
            keys.len()
        )));
    }

    let own = keypair.pubkey();
    Ok(keys[..required]
        .iter()
        .map(|key| {
            if *key == own {
                SlotSigner::Keypair(keypair)
            } else {
                SlotSigner::Placeholder(NullSigner::new(key))
            }
        })
        .collect())
}

/// Re-sign a transaction's message with the service keypair.
///
/// # Errors
///
/// Returns [`ExecutionError::SigningFailed`] if the signer list does not
/// line up with the message's required signers.
pub fn sign_transaction(
    transaction: VersionedTransaction,
    keypair: &Keypair,
) -> Result<(VersionedTransaction, Vec<usize>), ExecutionError> {
    let slots = resolve_signers(&transaction.message, keypair)?;
    let signed_slots = slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| !slot.is_placeholder())
        .map(|(index, _)| index)
        .collect();

    let signers: Vec<&dyn Signer> = slots.iter().map(|slot| slot as &dyn Signer).collect();
    let signed = VersionedTransaction::try_new(transaction.message, &signers)
        .map_err(|e| ExecutionError::SigningFailed(e.to_string()))?;

    Ok((signed, signed_slots))
}

/// Decode a base64 wire transaction.
///
/// # Errors
///
/// Returns [`ExecutionError::Decode`] for invalid base64 or a malformed
/// transaction.
pub fn decode_transaction(encoded: &str) -> Result<VersionedTransaction, ExecutionError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ExecutionError::Decode(format!("invalid base64: {e}")))?;
    bincode::deserialize(&bytes)
        .map_err(|e| ExecutionError::Decode(format!("invalid transaction: {e}")))
}

/// Encode a transaction to base64 wire format.
///
/// # Errors
///
/// Returns [`ExecutionError::Encode`] if serialization fails.
pub fn encode_transaction(transaction: &VersionedTransaction) -> Result<String, ExecutionError> {
    let bytes =
        bincode::serialize(transaction).map_err(|e| ExecutionError::Encode(e.to_string()))?;
    Ok(STANDARD.encode(bytes))
}

/// Decode, sign, and re-encode a base64 transaction.
///
/// # Errors
///
/// Returns an [`ExecutionError`] if any of the steps fail.
pub fn sign_encoded(
    encoded: &str,
    keypair: &Keypair,
) -> Result<SignedTransaction, ExecutionError> {
    let (transaction, signed_slots) = sign_transaction(decode_transaction(encoded)?, keypair)?;
    let signature = transaction
        .signatures
        .first()
        .copied()
        .ok_or_else(|| ExecutionError::SigningFailed("transaction has no signatures".into()))?;

    Ok(SignedTransaction {
        encoded: encode_transaction(&transaction)?,
        transaction,
        signature,
        signed_slots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::hash::Hash;
    use solana_sdk::instruction::{AccountMeta, Instruction};
    use solana_sdk::message::{v0, Message};

    /// Build an unsigned transaction requiring signatures from `signers`, in order.
    fn unsigned_legacy(signers: &[Pubkey]) -> VersionedTransaction {
        let accounts = signers
            .iter()
            .map(|key| AccountMeta::new(*key, true))
            .collect();
        let instruction = Instruction::new_with_bytes(Pubkey::new_unique(), &[7, 7, 7], accounts);
        let message =
            Message::new_with_blockhash(&[instruction], Some(&signers[0]), &Hash::new_unique());

        VersionedTransaction {
            signatures: vec![Signature::default(); signers.len()],
            message: VersionedMessage::Legacy(message),
        }
    }

    fn verifies(transaction: &VersionedTransaction, slot: usize) -> bool {
        let key = transaction.message.static_account_keys()[slot];
        transaction.signatures[slot].verify(key.as_ref(), &transaction.message.serialize())
    }

    #[test]
    fn signs_own_slot_and_leaves_others_as_placeholders() {
        let keypair = Keypair::new();
        let relayer = Pubkey::new_unique();
        let transaction = unsigned_legacy(&[relayer, keypair.pubkey()]);

        let (signed, slots) = sign_transaction(transaction, &keypair).unwrap();

        assert_eq!(slots, vec![1]);
        assert_eq!(signed.signatures.len(), 2);
        assert_eq!(signed.signatures[0], Signature::default());
        assert!(verifies(&signed, 1));
    }

    #[test]
    fn resolves_signers_in_slot_order() {
        let keypair = Keypair::new();
        let transaction =
            unsigned_legacy(&[Pubkey::new_unique(), keypair.pubkey(), Pubkey::new_unique()]);
        let required = &transaction.message.static_account_keys()[..3];

        let slots = resolve_signers(&transaction.message, &keypair).unwrap();

        assert_eq!(slots.len(), 3);
        for (slot, key) in slots.iter().zip(required) {
            assert_eq!(slot.pubkey(), *key);
            assert_eq!(slot.is_placeholder(), *key != keypair.pubkey());
        }
        assert_eq!(slots.iter().filter(|slot| !slot.is_placeholder()).count(), 1);
    }

    #[test]
    fn signs_v0_message_as_fee_payer() {
        let keypair = Keypair::new();
        let instruction = Instruction::new_with_bytes(
            Pubkey::new_unique(),
            &[1],
            vec![AccountMeta::new(keypair.pubkey(), true)],
        );
        let message =
            v0::Message::try_compile(&keypair.pubkey(), &[instruction], &[], Hash::new_unique())
                .unwrap();
        let transaction = VersionedTransaction {
            signatures: vec![Signature::default()],
            message: VersionedMessage::V0(message),
        };

        let encoded = encode_transaction(&transaction).unwrap();
        let signed = sign_encoded(&encoded, &keypair).unwrap();

        assert_eq!(signed.signed_slots, vec![0]);
        assert_eq!(signed.signature, signed.transaction.signatures[0]);
        assert!(verifies(&signed.transaction, 0));

        let round_trip = decode_transaction(&signed.encoded).unwrap();
        assert_eq!(round_trip, signed.transaction);
    }

    #[test]
    fn foreign_transaction_gets_only_placeholders() {
        let keypair = Keypair::new();
        let transaction = unsigned_legacy(&[Pubkey::new_unique()]);

        let (signed, slots) = sign_transaction(transaction, &keypair).unwrap();

        assert!(slots.is_empty());
        assert_eq!(signed.signatures, vec![Signature::default()]);
    }

    #[test]
    fn rejects_garbage_input() {
        let keypair = Keypair::new();

        assert!(matches!(
            sign_encoded("not base64!!", &keypair),
            Err(ExecutionError::Decode(_))
        ));
        assert!(matches!(
            sign_encoded(&STANDARD.encode([1u8, 2, 3]), &keypair),
            Err(ExecutionError::Decode(_))
        ));
    }
}
