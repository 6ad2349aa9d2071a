//! Span State Anchor Contract - Entry Points
//!
//! Two report handlers (one per direction) and the lookup queries the
//! message bus and relayers build on. Both registries are append-only.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use common::hash::{bytes32_to_hex, ZERO_BYTES32};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ReportedBlockResponse,
    ReportedBlocksResponse, ReportedCheckpointResponse, ReportedCheckpointsResponse,
};
use crate::state::{
    Config, ReportedBlock, ReportedCheckpoint, AUX_CHECKPOINTS, CONFIG, CONTRACT_NAME,
    CONTRACT_VERSION, ORIGIN_BLOCKS,
};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

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

    if msg.epoch_length == 0 {
        return Err(ContractError::ZeroEpochLength);
    }

    let config = Config {
        epoch_length: msg.epoch_length,
        bounty: msg.bounty,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("epoch_length", config.epoch_length.to_string())
        .add_attribute("bounty", config.bounty.to_string()))
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
        ExecuteMsg::ReportOriginBlock { height, state_root } => {
            execute_report_origin_block(deps, info, height, state_root)
        }
        ExecuteMsg::ReportAuxiliaryCheckpoint { height, block_hash } => {
            execute_report_auxiliary_checkpoint(deps, info, height, block_hash)
        }
    }
}

/// Record an origin-chain state root against the exact bounty payment.
pub fn execute_report_origin_block(
    deps: DepsMut,
    info: MessageInfo,
    height: u64,
    state_root: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let root = as_bytes32(&state_root)?;
    if root == ZERO_BYTES32 {
        return Err(ContractError::ZeroStateRoot);
    }

    // The bounty must arrive as exactly one coin of the configured denom
    // and amount; under- and over-payment are both rejected.
    let exact = match info.funds.as_slice() {
        [coin] => coin.denom == config.bounty.denom && coin.amount == config.bounty.amount,
        _ => false,
    };
    if !exact {
        return Err(ContractError::BountyMismatch {
            expected: config.bounty.to_string(),
            got: funds_display(&info.funds),
        });
    }

    if ORIGIN_BLOCKS.has(deps.storage, &root) {
        return Err(ContractError::StateRootAlreadyReported {
            state_root: bytes32_to_hex(&root),
        });
    }

    let block = ReportedBlock {
        height,
        state_root: root,
    };
    ORIGIN_BLOCKS.save(deps.storage, &root, &block)?;

    Ok(Response::new()
        .add_attribute("method", "report_origin_block")
        .add_attribute("height", height.to_string())
        .add_attribute("state_root", bytes32_to_hex(&root))
        .add_attribute("reporter", info.sender))
}

/// Record an auxiliary checkpoint at an epoch-aligned height.
pub fn execute_report_auxiliary_checkpoint(
    deps: DepsMut,
    info: MessageInfo,
    height: u64,
    block_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }

    let hash = as_bytes32(&block_hash)?;
    if hash == ZERO_BYTES32 {
        return Err(ContractError::ZeroBlockHash);
    }

    if height % config.epoch_length != 0 {
        return Err(ContractError::HeightNotAligned {
            height,
            epoch_length: config.epoch_length,
        });
    }

    if AUX_CHECKPOINTS.has(deps.storage, &hash) {
        return Err(ContractError::CheckpointAlreadyReported {
            block_hash: bytes32_to_hex(&hash),
        });
    }

    let checkpoint = ReportedCheckpoint {
        height,
        block_hash: hash,
    };
    AUX_CHECKPOINTS.save(deps.storage, &hash, &checkpoint)?;

    Ok(Response::new()
        .add_attribute("method", "report_auxiliary_checkpoint")
        .add_attribute("height", height.to_string())
        .add_attribute("block_hash", bytes32_to_hex(&hash))
        .add_attribute("reporter", info.sender))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ReportedOriginBlock { state_root } => {
            to_json_binary(&query_reported_origin_block(deps, state_root)?)
        }
        QueryMsg::ReportedAuxiliaryCheckpoint { block_hash } => {
            to_json_binary(&query_reported_auxiliary_checkpoint(deps, block_hash)?)
        }
        QueryMsg::ReportedOriginBlocks { start_after, limit } => {
            to_json_binary(&query_reported_origin_blocks(deps, start_after, limit)?)
        }
        QueryMsg::ReportedAuxiliaryCheckpoints { start_after, limit } => {
            to_json_binary(&query_reported_auxiliary_checkpoints(
                deps,
                start_after,
                limit,
            )?)
        }
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        epoch_length: config.epoch_length,
        bounty: config.bounty,
    })
}

pub fn query_reported_origin_block(
    deps: Deps,
    state_root: Binary,
) -> StdResult<ReportedBlockResponse> {
    let block = ORIGIN_BLOCKS.may_load(deps.storage, state_root.as_slice())?;
    Ok(ReportedBlockResponse { block })
}

pub fn query_reported_auxiliary_checkpoint(
    deps: Deps,
    block_hash: Binary,
) -> StdResult<ReportedCheckpointResponse> {
    let checkpoint = AUX_CHECKPOINTS.may_load(deps.storage, block_hash.as_slice())?;
    Ok(ReportedCheckpointResponse { checkpoint })
}

pub fn query_reported_origin_blocks(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<ReportedBlocksResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_ref().map(|b| Bound::exclusive(b.as_slice()));

    let blocks = ORIGIN_BLOCKS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, block)| block))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ReportedBlocksResponse { blocks })
}

pub fn query_reported_auxiliary_checkpoints(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<ReportedCheckpointsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_ref().map(|b| Bound::exclusive(b.as_slice()));

    let checkpoints = AUX_CHECKPOINTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, checkpoint)| checkpoint))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ReportedCheckpointsResponse { checkpoints })
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

// ============================================================================
// Internal helpers
// ============================================================================

fn as_bytes32(binary: &Binary) -> Result<[u8; 32], ContractError> {
    binary
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: binary.len() })
}

fn funds_display(funds: &[Coin]) -> String {
    if funds.is_empty() {
        "no funds".to_string()
    } else {
        funds
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
