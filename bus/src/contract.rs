//! Span Message Bus Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Outbox and inbox transition handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_confirm_message, execute_confirm_revocation, execute_declare_message,
    execute_declare_revocation, execute_progress_inbox, execute_progress_inbox_with_proof,
    execute_progress_outbox, execute_progress_outbox_revocation,
    execute_progress_outbox_with_proof,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_inbox_message, query_inbox_status, query_message_hash, query_next_nonce,
    query_outbox_message, query_outbox_status, query_verify_proof,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let anchor = deps.api.addr_validate(&msg.anchor)?;
    CONFIG.save(deps.storage, &Config { anchor: anchor.clone() })?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("anchor", anchor))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Outbox (sender side)
        ExecuteMsg::DeclareMessage {
            intent_hash,
            nonce,
            gas_price,
            gas_limit,
            hash_lock,
        } => execute_declare_message(deps, info, intent_hash, nonce, gas_price, gas_limit, hash_lock),
        ExecuteMsg::ProgressOutbox {
            message_hash,
            unlock_secret,
        } => execute_progress_outbox(deps, info, message_hash, unlock_secret),
        ExecuteMsg::ProgressOutboxWithProof {
            message_hash,
            inbox_status,
            state_root,
            proof,
        } => execute_progress_outbox_with_proof(
            deps,
            info,
            message_hash,
            inbox_status,
            state_root,
            proof,
        ),
        ExecuteMsg::DeclareRevocation { message_hash } => {
            execute_declare_revocation(deps, info, message_hash)
        }
        ExecuteMsg::ProgressOutboxRevocation {
            message_hash,
            unlock_secret,
        } => execute_progress_outbox_revocation(deps, info, message_hash, unlock_secret),

        // Inbox (receiver side)
        ExecuteMsg::ConfirmMessage {
            intent_hash,
            nonce,
            gas_price,
            gas_limit,
            sender,
            hash_lock,
            state_root,
            proof,
        } => execute_confirm_message(
            deps,
            info,
            intent_hash,
            nonce,
            gas_price,
            gas_limit,
            sender,
            hash_lock,
            state_root,
            proof,
        ),
        ExecuteMsg::ProgressInbox {
            message_hash,
            unlock_secret,
        } => execute_progress_inbox(deps, info, message_hash, unlock_secret),
        ExecuteMsg::ProgressInboxWithProof {
            message_hash,
            outbox_status,
            state_root,
            proof,
        } => execute_progress_inbox_with_proof(
            deps,
            info,
            message_hash,
            outbox_status,
            state_root,
            proof,
        ),
        ExecuteMsg::ConfirmRevocation {
            message_hash,
            state_root,
            proof,
        } => execute_confirm_revocation(deps, info, message_hash, state_root, proof),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::OutboxMessage { message_hash } => {
            to_json_binary(&query_outbox_message(deps, message_hash)?)
        }
        QueryMsg::InboxMessage { message_hash } => {
            to_json_binary(&query_inbox_message(deps, message_hash)?)
        }
        QueryMsg::OutboxStatus { message_hash } => {
            to_json_binary(&query_outbox_status(deps, message_hash)?)
        }
        QueryMsg::InboxStatus { message_hash } => {
            to_json_binary(&query_inbox_status(deps, message_hash)?)
        }
        QueryMsg::NextNonce { sender } => to_json_binary(&query_next_nonce(deps, sender)?),
        QueryMsg::MessageHash {
            intent_hash,
            nonce,
            gas_price,
            gas_limit,
            sender,
        } => to_json_binary(&query_message_hash(
            intent_hash,
            nonce,
            gas_price,
            gas_limit,
            sender,
        )?),
        QueryMsg::VerifyProof {
            value,
            encoded_path,
            proof,
            root,
        } => to_json_binary(&query_verify_proof(value, encoded_path, proof, root)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
