//! State definitions for the Span state anchor contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Coin;
use cw_storage_plus::{Item, Map};

/// Contract configuration, fixed at instantiation.
#[cw_serde]
pub struct Config {
    /// Heights of auxiliary checkpoints must be multiples of this
    pub epoch_length: u64,
    /// Exact payment required with every origin block report
    pub bounty: Coin,
}

/// An origin-chain state root observed at a height.
#[cw_serde]
pub struct ReportedBlock {
    pub height: u64,
    pub state_root: [u8; 32],
}

/// An auxiliary-chain checkpoint block hash observed at a height.
#[cw_serde]
pub struct ReportedCheckpoint {
    pub height: u64,
    pub block_hash: [u8; 32],
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:span-anchor";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Reported origin state roots
/// Key: 32-byte state root, Value: ReportedBlock
pub const ORIGIN_BLOCKS: Map<&[u8], ReportedBlock> = Map::new("origin_blocks");

/// Reported auxiliary checkpoints
/// Key: 32-byte block hash, Value: ReportedCheckpoint
pub const AUX_CHECKPOINTS: Map<&[u8], ReportedCheckpoint> = Map::new("aux_checkpoints");
