//! Span State Anchor Contract
//!
//! The anchor is the root of trust for cross-chain proofs: it records,
//! per direction, the commitments one chain has observed of the other.
//!
//! # Origin direction
//! Relayers report origin-chain state roots with `ReportOriginBlock`,
//! paying an exact, fixed bounty per report. Heights are unconstrained
//! and several distinct roots may share a height; competing forks are
//! recorded side by side, never resolved here.
//!
//! # Auxiliary direction
//! `ReportAuxiliaryCheckpoint` records this chain's own checkpoint block
//! hashes at heights aligned to a fixed epoch length, without payment.
//!
//! Both registries are append-only: a commitment is immutable once
//! recorded and duplicates are rejected regardless of height. The message
//! bus queries `ReportedOriginBlock` to decide whether a proof's root is
//! trusted.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
