//! Error types for the Span message bus contract.
//!
//! Every variant aborts the attempted transition with no partial effect.
//! Proof-verification failure surfaces as `InvalidStorageProof`, a
//! state-mismatch-class rejection rather than a distinct exception path.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Preconditions
    // ========================================================================

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },

    #[error("Hash lock must not be zero")]
    ZeroHashLock,

    // ========================================================================
    // Replay & ordering
    // ========================================================================

    #[error("Invalid nonce: expected {expected}, got {got}")]
    InvalidNonce { expected: u64, got: u64 },

    #[error("Previous process not completed")]
    PreviousProcessIncomplete,

    #[error("Message already declared: {message_hash}")]
    MessageAlreadyDeclared { message_hash: String },

    // ========================================================================
    // State machine
    // ========================================================================

    #[error("Message in outbox must be {expected}, found {actual}")]
    OutboxStatusMismatch { expected: String, actual: String },

    #[error("Message in inbox must be {expected}, found {actual}")]
    InboxStatusMismatch { expected: String, actual: String },

    #[error("Attested counterpart status must be Declared or Progressed, got {got}")]
    UnattestableStatus { got: String },

    // ========================================================================
    // Authorization
    // ========================================================================

    #[error("Only the message sender may declare revocation")]
    UnauthorizedSender,

    // ========================================================================
    // Hashlock & proofs
    // ========================================================================

    #[error("Invalid unlock secret")]
    InvalidUnlockSecret,

    #[error("State root not anchored: {state_root}")]
    RootNotAnchored { state_root: String },

    #[error("Storage proof does not attest the claimed counterpart entry")]
    InvalidStorageProof,
}
