//! Message identifier derivation and registry trie paths.
//!
//! The message hash is keccak256 over a fixed 192-byte preimage: a
//! type-hash domain separator followed by the identifying fields, each
//! occupying one 32-byte slot (integers big-endian, left-padded; the
//! sender string hashed to fixed width). The hash lock is deliberately
//! not part of the preimage: it is creation-time metadata, not identity,
//! so two declarations differing only in their lock collide and the
//! second is rejected as a duplicate.

use cosmwasm_std::Uint128;

use common::hash::keccak256;

/// Schema string behind the message type hash.
const MESSAGE_SCHEMA: &[u8] =
    b"SpanMessage(bytes32 intentHash,uint64 nonce,uint128 gasPrice,uint128 gasLimit,string sender)";

/// Domain separator distinguishing message digests from other keccak uses.
pub fn message_typehash() -> [u8; 32] {
    keccak256(MESSAGE_SCHEMA)
}

/// Derive the deterministic message identifier.
pub fn message_digest(
    intent_hash: &[u8; 32],
    nonce: u64,
    gas_price: Uint128,
    gas_limit: Uint128,
    sender: &str,
) -> [u8; 32] {
    // 6 slots of 32 bytes: typehash | intent | nonce | gasPrice | gasLimit | sender
    let mut data = [0u8; 192];

    data[0..32].copy_from_slice(&message_typehash());
    data[32..64].copy_from_slice(intent_hash);

    // u64 nonce left-padded into bytes 88-95
    data[64 + 24..96].copy_from_slice(&nonce.to_be_bytes());

    // u128 values left-padded into the low 16 bytes of their slots
    data[96 + 16..128].copy_from_slice(&gas_price.u128().to_be_bytes());
    data[128 + 16..160].copy_from_slice(&gas_limit.u128().to_be_bytes());

    // the sender is a chain-format string; committed as its keccak hash
    data[160..192].copy_from_slice(&keccak256(sender.as_bytes()));

    keccak256(&data)
}

/// Compact-encoded trie path of a registry entry.
///
/// Registry tries key entries by keccak256 of the message hash. The 64
/// resulting nibbles always compact-encode to the leaf/even flag byte
/// followed by the hashed key itself.
pub fn registry_path(message_hash: &[u8; 32]) -> Vec<u8> {
    let hashed = keccak256(message_hash);
    let mut path = Vec::with_capacity(33);
    path.push(0x20);
    path.extend_from_slice(&hashed);
    path
}
