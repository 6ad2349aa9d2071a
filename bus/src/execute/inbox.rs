//! Inbox handlers (receiver side).
//!
//! Every entry begins with a proof-gated confirmation of the counterpart
//! outbox declaration. Progression mirrors the outbox secret reveal, with
//! a proof-based alternative; revocations arrive the same way.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Uint128};

use common::hash::{bytes32_to_hex, keccak256, ZERO_BYTES32};

use crate::error::ContractError;
use crate::execute::{as_bytes32, load_inbox_expecting, prove_counterpart};
use crate::hash::message_digest;
use crate::state::{Message, MessageEntry, MessageStatus, CONFIG, INBOX};

/// Confirm a counterpart outbox declaration into the inbox.
#[allow(clippy::too_many_arguments)]
pub fn execute_confirm_message(
    deps: DepsMut,
    _info: MessageInfo,
    intent_hash: Binary,
    nonce: u64,
    gas_price: Uint128,
    gas_limit: Uint128,
    sender: String,
    hash_lock: Binary,
    state_root: Binary,
    proof: Binary,
) -> Result<Response, ContractError> {
    let intent = as_bytes32(&intent_hash)?;
    let lock = as_bytes32(&hash_lock)?;
    if lock == ZERO_BYTES32 {
        return Err(ContractError::ZeroHashLock);
    }
    let root = as_bytes32(&state_root)?;

    let message_hash = message_digest(&intent, nonce, gas_price, gas_limit, &sender);
    if INBOX.has(deps.storage, &message_hash) {
        return Err(ContractError::MessageAlreadyDeclared {
            message_hash: bytes32_to_hex(&message_hash),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let height = prove_counterpart(
        deps.as_ref(),
        &config.anchor,
        &message_hash,
        MessageStatus::Declared,
        &root,
        proof.as_slice(),
    )?;

    let entry = MessageEntry {
        message: Message {
            intent_hash: intent,
            nonce,
            gas_price,
            gas_limit,
            sender: sender.clone(),
            hash_lock: lock,
        },
        status: MessageStatus::Declared,
    };
    INBOX.save(deps.storage, &message_hash, &entry)?;

    Ok(Response::new()
        .set_data(Binary::from(message_hash.to_vec()))
        .add_attribute("method", "confirm_message")
        .add_attribute("message_hash", bytes32_to_hex(&message_hash))
        .add_attribute("sender", sender)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("state_root", bytes32_to_hex(&root))
        .add_attribute("anchored_height", height.to_string()))
}

/// Progress a confirmed inbox message by revealing the unlock secret.
pub fn execute_progress_inbox(
    deps: DepsMut,
    _info: MessageInfo,
    message_hash: Binary,
    unlock_secret: Binary,
) -> Result<Response, ContractError> {
    let hash = as_bytes32(&message_hash)?;
    let mut entry = load_inbox_expecting(deps.storage, &hash, MessageStatus::Declared)?;

    if keccak256(unlock_secret.as_slice()) != entry.message.hash_lock {
        return Err(ContractError::InvalidUnlockSecret);
    }

    entry.status = MessageStatus::Progressed;
    INBOX.save(deps.storage, &hash, &entry)?;

    Ok(Response::new()
        .add_attribute("method", "progress_inbox")
        .add_attribute("message_hash", bytes32_to_hex(&hash))
        .add_attribute("unlock_secret", hex::encode(unlock_secret.as_slice())))
}

/// Progress a confirmed inbox message with a proof of the counterpart
/// outbox status.
pub fn execute_progress_inbox_with_proof(
    deps: DepsMut,
    _info: MessageInfo,
    message_hash: Binary,
    outbox_status: MessageStatus,
    state_root: Binary,
    proof: Binary,
) -> Result<Response, ContractError> {
    let hash = as_bytes32(&message_hash)?;
    let root = as_bytes32(&state_root)?;
    let mut entry = load_inbox_expecting(deps.storage, &hash, MessageStatus::Declared)?;

    // the secret is only ever revealed once the counterpart is at least
    // declared; anything else cannot justify progression
    if !matches!(
        outbox_status,
        MessageStatus::Declared | MessageStatus::Progressed
    ) {
        return Err(ContractError::UnattestableStatus {
            got: outbox_status.to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let height = prove_counterpart(
        deps.as_ref(),
        &config.anchor,
        &hash,
        outbox_status,
        &root,
        proof.as_slice(),
    )?;

    entry.status = MessageStatus::Progressed;
    INBOX.save(deps.storage, &hash, &entry)?;

    Ok(Response::new()
        .add_attribute("method", "progress_inbox_with_proof")
        .add_attribute("message_hash", bytes32_to_hex(&hash))
        .add_attribute("outbox_status", outbox_status.to_string())
        .add_attribute("state_root", bytes32_to_hex(&root))
        .add_attribute("anchored_height", height.to_string()))
}

/// Confirm a counterpart revocation, revoking the inbox message.
pub fn execute_confirm_revocation(
    deps: DepsMut,
    _info: MessageInfo,
    message_hash: Binary,
    state_root: Binary,
    proof: Binary,
) -> Result<Response, ContractError> {
    let hash = as_bytes32(&message_hash)?;
    let root = as_bytes32(&state_root)?;
    let mut entry = load_inbox_expecting(deps.storage, &hash, MessageStatus::Declared)?;

    let config = CONFIG.load(deps.storage)?;
    let height = prove_counterpart(
        deps.as_ref(),
        &config.anchor,
        &hash,
        MessageStatus::DeclaredRevocation,
        &root,
        proof.as_slice(),
    )?;

    entry.status = MessageStatus::Revoked;
    INBOX.save(deps.storage, &hash, &entry)?;

    Ok(Response::new()
        .add_attribute("method", "confirm_revocation")
        .add_attribute("message_hash", bytes32_to_hex(&hash))
        .add_attribute("state_root", bytes32_to_hex(&root))
        .add_attribute("anchored_height", height.to_string()))
}
