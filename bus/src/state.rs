//! State definitions for the Span message bus contract.
//!
//! The outbox and inbox are separate maps keyed by the 32-byte message
//! hash. The same hash can legitimately sit in different states on each
//! side while a transfer is in flight; nothing is ever shared between
//! the registries.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Lifecycle status of a message within one registry.
///
/// Transitions are monotonic: `Undeclared → Declared → Progressed`, or
/// `Declared → DeclaredRevocation → Revoked`. `Undeclared` is implicit
/// (absence of a record) and never stored.
#[cw_serde]
#[derive(Copy)]
pub enum MessageStatus {
    Undeclared,
    Declared,
    Progressed,
    DeclaredRevocation,
    Revoked,
}

impl MessageStatus {
    /// Byte committed into the registry trie for proof-gated transitions.
    pub fn as_byte(&self) -> u8 {
        match self {
            MessageStatus::Undeclared => 0,
            MessageStatus::Declared => 1,
            MessageStatus::Progressed => 2,
            MessageStatus::DeclaredRevocation => 3,
            MessageStatus::Revoked => 4,
        }
    }

    /// Terminal statuses free the sender for a new declaration.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MessageStatus::Progressed | MessageStatus::Revoked)
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageStatus::Undeclared => "Undeclared",
            MessageStatus::Declared => "Declared",
            MessageStatus::Progressed => "Progressed",
            MessageStatus::DeclaredRevocation => "DeclaredRevocation",
            MessageStatus::Revoked => "Revoked",
        };
        f.write_str(name)
    }
}

/// The immutable fields of a message, fixed at declaration/confirmation.
#[cw_serde]
pub struct Message {
    /// Commitment to the workflow payload; opaque to the bus
    pub intent_hash: [u8; 32],
    /// Sender's nonce at declaration
    pub nonce: u64,
    /// Reimbursement price carried through the digest, not interpreted
    pub gas_price: Uint128,
    /// Reimbursement limit carried through the digest, not interpreted
    pub gas_limit: Uint128,
    /// Originator identity (outbox: the local caller; inbox: as carried
    /// in the confirmation)
    pub sender: String,
    /// keccak256 of the unlock secret; never zero
    pub hash_lock: [u8; 32],
}

/// One registry record.
#[cw_serde]
pub struct MessageEntry {
    pub message: Message,
    pub status: MessageStatus,
}

/// Contract configuration.
#[cw_serde]
pub struct Config {
    /// State anchor contract queried for trusted roots
    pub anchor: Addr,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:span-bus";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Outbox registry (sender side)
/// Key: 32-byte message hash, Value: MessageEntry
pub const OUTBOX: Map<&[u8], MessageEntry> = Map::new("outbox");

/// Inbox registry (receiver side)
/// Key: 32-byte message hash, Value: MessageEntry
pub const INBOX: Map<&[u8], MessageEntry> = Map::new("inbox");

/// Last nonce consumed per sender; the next expected nonce is this + 1
pub const NONCES: Map<&Addr, u64> = Map::new("nonces");

/// The sender's active outbox message, cleared on terminal transitions.
/// At most one non-terminal message may exist per sender.
pub const OUTSTANDING: Map<&Addr, [u8; 32]> = Map::new("outstanding");
