//! Query handlers for the Span message bus contract.

use cosmwasm_std::{Binary, Deps, StdResult, Uint128};

use common::proof;

use crate::msg::{
    ConfigResponse, MessageHashResponse, MessageResponse, NextNonceResponse, StatusResponse,
    VerifyProofResponse,
};
use crate::state::{MessageStatus, CONFIG, INBOX, NONCES, OUTBOX};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        anchor: config.anchor.to_string(),
    })
}

pub fn query_outbox_message(deps: Deps, message_hash: Binary) -> StdResult<MessageResponse> {
    let entry = OUTBOX.may_load(deps.storage, message_hash.as_slice())?;
    Ok(MessageResponse { entry })
}

pub fn query_inbox_message(deps: Deps, message_hash: Binary) -> StdResult<MessageResponse> {
    let entry = INBOX.may_load(deps.storage, message_hash.as_slice())?;
    Ok(MessageResponse { entry })
}

pub fn query_outbox_status(deps: Deps, message_hash: Binary) -> StdResult<StatusResponse> {
    let status = OUTBOX
        .may_load(deps.storage, message_hash.as_slice())?
        .map(|entry| entry.status)
        .unwrap_or(MessageStatus::Undeclared);
    Ok(StatusResponse { status })
}

pub fn query_inbox_status(deps: Deps, message_hash: Binary) -> StdResult<StatusResponse> {
    let status = INBOX
        .may_load(deps.storage, message_hash.as_slice())?
        .map(|entry| entry.status)
        .unwrap_or(MessageStatus::Undeclared);
    Ok(StatusResponse { status })
}

pub fn query_next_nonce(deps: Deps, sender: String) -> StdResult<NextNonceResponse> {
    let sender = deps.api.addr_validate(&sender)?;
    let last = NONCES.may_load(deps.storage, &sender)?.unwrap_or(0);
    Ok(NextNonceResponse {
        next_nonce: last + 1,
    })
}

/// Pure digest computation; lets the workflow orchestrator derive the
/// identifier it will observe in events without replicating the layout.
pub fn query_message_hash(
    intent_hash: Binary,
    nonce: u64,
    gas_price: Uint128,
    gas_limit: Uint128,
    sender: String,
) -> StdResult<MessageHashResponse> {
    let intent: [u8; 32] = intent_hash.as_slice().try_into().map_err(|_| {
        cosmwasm_std::StdError::generic_err("Invalid hash length: expected 32 bytes")
    })?;
    let message_hash = crate::hash::message_digest(&intent, nonce, gas_price, gas_limit, &sender);
    Ok(MessageHashResponse {
        message_hash: Binary::from(message_hash.to_vec()),
    })
}

/// Pure proof verification; a failing proof answers `false`, it never
/// errors.
pub fn query_verify_proof(
    value: Binary,
    encoded_path: Binary,
    proof: Binary,
    root: Binary,
) -> StdResult<VerifyProofResponse> {
    let root: [u8; 32] = match root.as_slice().try_into() {
        Ok(root) => root,
        Err(_) => return Ok(VerifyProofResponse { valid: false }),
    };
    let valid = proof::verify(
        value.as_slice(),
        encoded_path.as_slice(),
        proof.as_slice(),
        &root,
    );
    Ok(VerifyProofResponse { valid })
}
