//! Execute message handlers for the Span message bus.
//!
//! Split by registry: `outbox` holds the sender-driven transitions,
//! `inbox` the proof-gated receiver side. Shared plumbing (32-byte
//! parsing, status-checked loads, anchored-root proof checks) lives
//! here.

mod inbox;
mod outbox;

pub use inbox::{
    execute_confirm_message, execute_confirm_revocation, execute_progress_inbox,
    execute_progress_inbox_with_proof,
};
pub use outbox::{
    execute_declare_message, execute_declare_revocation, execute_progress_outbox,
    execute_progress_outbox_revocation, execute_progress_outbox_with_proof,
};

use cosmwasm_std::{Addr, Binary, Deps, Storage};

use anchor::msg::{QueryMsg as AnchorQueryMsg, ReportedBlockResponse};
use common::hash::bytes32_to_hex;
use common::proof;

use crate::error::ContractError;
use crate::hash::registry_path;
use crate::state::{MessageEntry, MessageStatus, INBOX, OUTBOX};

pub(crate) fn as_bytes32(binary: &Binary) -> Result<[u8; 32], ContractError> {
    binary
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: binary.len() })
}

/// Load an outbox entry, requiring it to sit in exactly `expected`.
/// Absence reads as `Undeclared`.
pub(crate) fn load_outbox_expecting(
    storage: &dyn Storage,
    message_hash: &[u8; 32],
    expected: MessageStatus,
) -> Result<MessageEntry, ContractError> {
    match OUTBOX.may_load(storage, message_hash)? {
        Some(entry) if entry.status == expected => Ok(entry),
        other => Err(ContractError::OutboxStatusMismatch {
            expected: expected.to_string(),
            actual: status_of(&other).to_string(),
        }),
    }
}

/// Load an inbox entry, requiring it to sit in exactly `expected`.
pub(crate) fn load_inbox_expecting(
    storage: &dyn Storage,
    message_hash: &[u8; 32],
    expected: MessageStatus,
) -> Result<MessageEntry, ContractError> {
    match INBOX.may_load(storage, message_hash)? {
        Some(entry) if entry.status == expected => Ok(entry),
        other => Err(ContractError::InboxStatusMismatch {
            expected: expected.to_string(),
            actual: status_of(&other).to_string(),
        }),
    }
}

fn status_of(entry: &Option<MessageEntry>) -> MessageStatus {
    entry
        .as_ref()
        .map(|e| e.status)
        .unwrap_or(MessageStatus::Undeclared)
}

/// Check that `state_root` is anchored and that `proof` attests the
/// counterpart registry holds `message_hash` in `attested`. Returns the
/// height the root was anchored at.
pub(crate) fn prove_counterpart(
    deps: Deps,
    anchor: &Addr,
    message_hash: &[u8; 32],
    attested: MessageStatus,
    state_root: &[u8; 32],
    proof: &[u8],
) -> Result<u64, ContractError> {
    let res: ReportedBlockResponse = deps.querier.query_wasm_smart(
        anchor.clone(),
        &AnchorQueryMsg::ReportedOriginBlock {
            state_root: Binary::from(state_root.to_vec()),
        },
    )?;
    let block = res.block.ok_or_else(|| ContractError::RootNotAnchored {
        state_root: bytes32_to_hex(state_root),
    })?;

    let path = registry_path(message_hash);
    if !proof::verify(&[attested.as_byte()], &path, proof, state_root) {
        return Err(ContractError::InvalidStorageProof);
    }
    Ok(block.height)
}
