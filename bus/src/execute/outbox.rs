//! Outbox handlers (sender side).
//!
//! Declaration consumes the sender's next nonce and latches them until
//! the message reaches a terminal status. Progression reveals the unlock
//! secret, or presents a proof of the counterpart inbox; revocation is a
//! sender-only detour that ends in Revoked.

use cosmwasm_std::{Addr, Binary, DepsMut, MessageInfo, Response, Uint128};

use common::hash::{bytes32_to_hex, keccak256, ZERO_BYTES32};

use crate::error::ContractError;
use crate::execute::{as_bytes32, load_outbox_expecting, prove_counterpart};
use crate::hash::message_digest;
use crate::state::{
    Message, MessageEntry, MessageStatus, CONFIG, NONCES, OUTBOX, OUTSTANDING,
};

/// Declare a new outbox message for `info.sender`.
pub fn execute_declare_message(
    deps: DepsMut,
    info: MessageInfo,
    intent_hash: Binary,
    nonce: u64,
    gas_price: Uint128,
    gas_limit: Uint128,
    hash_lock: Binary,
) -> Result<Response, ContractError> {
    let intent = as_bytes32(&intent_hash)?;
    let lock = as_bytes32(&hash_lock)?;
    if lock == ZERO_BYTES32 {
        return Err(ContractError::ZeroHashLock);
    }

    // one in-flight message per sender
    if OUTSTANDING.has(deps.storage, &info.sender) {
        return Err(ContractError::PreviousProcessIncomplete);
    }

    let expected = NONCES.may_load(deps.storage, &info.sender)?.unwrap_or(0) + 1;
    if nonce != expected {
        return Err(ContractError::InvalidNonce {
            expected,
            got: nonce,
        });
    }

    let message_hash = message_digest(&intent, nonce, gas_price, gas_limit, info.sender.as_str());
    if OUTBOX.has(deps.storage, &message_hash) {
        return Err(ContractError::MessageAlreadyDeclared {
            message_hash: bytes32_to_hex(&message_hash),
        });
    }

    let entry = MessageEntry {
        message: Message {
            intent_hash: intent,
            nonce,
            gas_price,
            gas_limit,
            sender: info.sender.to_string(),
            hash_lock: lock,
        },
        status: MessageStatus::Declared,
    };
    OUTBOX.save(deps.storage, &message_hash, &entry)?;
    NONCES.save(deps.storage, &info.sender, &nonce)?;
    OUTSTANDING.save(deps.storage, &info.sender, &message_hash)?;

    Ok(Response::new()
        .set_data(Binary::from(message_hash.to_vec()))
        .add_attribute("method", "declare_message")
        .add_attribute("message_hash", bytes32_to_hex(&message_hash))
        .add_attribute("intent_hash", bytes32_to_hex(&intent))
        .add_attribute("sender", info.sender)
        .add_attribute("nonce", nonce.to_string()))
}

/// Progress a declared message by revealing the unlock secret.
pub fn execute_progress_outbox(
    deps: DepsMut,
    _info: MessageInfo,
    message_hash: Binary,
    unlock_secret: Binary,
) -> Result<Response, ContractError> {
    let hash = as_bytes32(&message_hash)?;
    let mut entry = load_outbox_expecting(deps.storage, &hash, MessageStatus::Declared)?;

    if keccak256(unlock_secret.as_slice()) != entry.message.hash_lock {
        return Err(ContractError::InvalidUnlockSecret);
    }

    entry.status = MessageStatus::Progressed;
    OUTBOX.save(deps.storage, &hash, &entry)?;
    OUTSTANDING.remove(deps.storage, &Addr::unchecked(entry.message.sender.clone()));

    Ok(Response::new()
        .add_attribute("method", "progress_outbox")
        .add_attribute("message_hash", bytes32_to_hex(&hash))
        .add_attribute("unlock_secret", hex::encode(unlock_secret.as_slice())))
}

/// Progress a declared message with a proof of the counterpart inbox.
pub fn execute_progress_outbox_with_proof(
    deps: DepsMut,
    _info: MessageInfo,
    message_hash: Binary,
    inbox_status: MessageStatus,
    state_root: Binary,
    proof: Binary,
) -> Result<Response, ContractError> {
    let hash = as_bytes32(&message_hash)?;
    let root = as_bytes32(&state_root)?;
    let mut entry = load_outbox_expecting(deps.storage, &hash, MessageStatus::Declared)?;

    // the counterpart only ever holds a confirmed or progressed copy
    if !matches!(
        inbox_status,
        MessageStatus::Declared | MessageStatus::Progressed
    ) {
        return Err(ContractError::UnattestableStatus {
            got: inbox_status.to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let height = prove_counterpart(
        deps.as_ref(),
        &config.anchor,
        &hash,
        inbox_status,
        &root,
        proof.as_slice(),
    )?;

    entry.status = MessageStatus::Progressed;
    OUTBOX.save(deps.storage, &hash, &entry)?;
    OUTSTANDING.remove(deps.storage, &Addr::unchecked(entry.message.sender.clone()));

    Ok(Response::new()
        .add_attribute("method", "progress_outbox_with_proof")
        .add_attribute("message_hash", bytes32_to_hex(&hash))
        .add_attribute("inbox_status", inbox_status.to_string())
        .add_attribute("state_root", bytes32_to_hex(&root))
        .add_attribute("anchored_height", height.to_string()))
}

/// Route a declared message into revocation. Sender only.
pub fn execute_declare_revocation(
    deps: DepsMut,
    info: MessageInfo,
    message_hash: Binary,
) -> Result<Response, ContractError> {
    let hash = as_bytes32(&message_hash)?;
    let mut entry = load_outbox_expecting(deps.storage, &hash, MessageStatus::Declared)?;

    if entry.message.sender != info.sender.as_str() {
        return Err(ContractError::UnauthorizedSender);
    }

    entry.status = MessageStatus::DeclaredRevocation;
    OUTBOX.save(deps.storage, &hash, &entry)?;

    Ok(Response::new()
        .add_attribute("method", "declare_revocation")
        .add_attribute("message_hash", bytes32_to_hex(&hash))
        .add_attribute("sender", info.sender)
        .add_attribute("nonce", entry.message.nonce.to_string()))
}

/// Complete a declared revocation by revealing the unlock secret.
pub fn execute_progress_outbox_revocation(
    deps: DepsMut,
    _info: MessageInfo,
    message_hash: Binary,
    unlock_secret: Binary,
) -> Result<Response, ContractError> {
    let hash = as_bytes32(&message_hash)?;
    let mut entry =
        load_outbox_expecting(deps.storage, &hash, MessageStatus::DeclaredRevocation)?;

    if keccak256(unlock_secret.as_slice()) != entry.message.hash_lock {
        return Err(ContractError::InvalidUnlockSecret);
    }

    entry.status = MessageStatus::Revoked;
    OUTBOX.save(deps.storage, &hash, &entry)?;
    OUTSTANDING.remove(deps.storage, &Addr::unchecked(entry.message.sender.clone()));

    Ok(Response::new()
        .add_attribute("method", "progress_outbox_revocation")
        .add_attribute("message_hash", bytes32_to_hex(&hash))
        .add_attribute("unlock_secret", hex::encode(unlock_secret.as_slice())))
}
