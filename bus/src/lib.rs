//! Span Message Bus Contract - Cross-Chain Message Lifecycle
//!
//! The bus tracks the lifecycle of cross-chain messages in two
//! independent registries sharing one deterministic identifier:
//!
//! # Outbox (sender side)
//! 1. A sender declares a message, committing to an intent hash and a
//!    hash lock and consuming their next nonce
//! 2. The message progresses when the unlock secret behind the hash lock
//!    is revealed, or it is routed into revocation by the sender
//!
//! # Inbox (receiver side)
//! 1. A relayer confirms the counterpart outbox declaration with a
//!    Merkle-Patricia proof against a state root recorded by the anchor
//!    contract
//! 2. The inbox entry progresses by secret reveal or by a second proof
//!    of the counterpart's progression; revocations are confirmed the
//!    same way
//!
//! # Security
//! - One non-terminal message per sender, strictly increasing nonces
//! - Hash locks must be non-zero commitments; reveal is checked against
//!   keccak256 of the presented secret
//! - Proof-gated transitions only trust roots the append-only anchor has
//!   recorded, so a fabricated counterpart state cannot be confirmed
//! - Every rejected call leaves the registries untouched

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{message_digest, registry_path};
