//! Common - Shared Primitives for Span Contracts
//!
//! This package provides the hashing, codec, and proof-verification
//! primitives used by the Span message bus and state anchor contracts:
//!
//! - keccak256 hashing and 32-byte hex helpers
//! - nibble paths and the compact (hex-prefix) path encoding
//! - a minimal RLP encoder/decoder for trie node serializations
//! - Merkle-Patricia inclusion-proof verification
//!
//! The `testing` module builds honest tries and extracts proofs in the
//! wire format `proof::verify` consumes. It ships unconditionally, the
//! way `cosmwasm_std::testing` does, so contract integration tests can
//! construct counterpart-registry proofs without extra features.

pub mod hash;
pub mod nibbles;
pub mod node;
pub mod proof;
pub mod rlp;
pub mod testing;

pub use crate::hash::{bytes32_to_hex, hex_to_bytes32, keccak256};
pub use crate::nibbles::{bytes_to_nibbles, decode_compact, encode_compact, CodecError};
pub use crate::node::ProofNode;
pub use crate::proof::verify;
