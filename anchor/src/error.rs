//! Error types for the Span state anchor contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Epoch length must not be zero")]
    ZeroEpochLength,

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },

    #[error("State root must not be zero")]
    ZeroStateRoot,

    #[error("Block hash must not be zero")]
    ZeroBlockHash,

    #[error("State root already reported: {state_root}")]
    StateRootAlreadyReported { state_root: String },

    #[error("Checkpoint already reported: {block_hash}")]
    CheckpointAlreadyReported { block_hash: String },

    #[error("Height {height} is not a multiple of the epoch length {epoch_length}")]
    HeightNotAligned { height: u64, epoch_length: u64 },

    #[error("Bounty mismatch: reporting requires exactly {expected}, got {got}")]
    BountyMismatch { expected: String, got: String },

    #[error("Checkpoint reports do not accept funds")]
    UnexpectedFunds,
}
