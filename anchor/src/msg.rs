//! Message types for the Span state anchor contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Coin};

use crate::state::{ReportedBlock, ReportedCheckpoint};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Height interval auxiliary checkpoints must align to (must be > 0)
    pub epoch_length: u64,
    /// Exact payment required with every origin block report
    pub bounty: Coin,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Record an observed origin-chain state root.
    ///
    /// Payable: the attached funds must be exactly the configured bounty,
    /// neither more nor less. The root must be non-zero and not reported
    /// before; several distinct roots may share a height.
    ReportOriginBlock {
        /// Origin chain height the root was observed at
        height: u64,
        /// 32-byte state root
        state_root: Binary,
    },

    /// Record an observed auxiliary checkpoint block hash.
    ///
    /// Not payable. The height must be an exact multiple of the epoch
    /// length; the hash must be non-zero and not reported before.
    ReportAuxiliaryCheckpoint {
        /// Auxiliary chain height, a multiple of the epoch length
        height: u64,
        /// 32-byte block hash
        block_hash: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Look up one reported origin state root. Returns `None` when the
    /// root was never anchored.
    #[returns(ReportedBlockResponse)]
    ReportedOriginBlock { state_root: Binary },

    /// Look up one reported auxiliary checkpoint
    #[returns(ReportedCheckpointResponse)]
    ReportedAuxiliaryCheckpoint { block_hash: Binary },

    /// Enumerate reported origin blocks, ordered by state root
    #[returns(ReportedBlocksResponse)]
    ReportedOriginBlocks {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },

    /// Enumerate reported auxiliary checkpoints, ordered by block hash
    #[returns(ReportedCheckpointsResponse)]
    ReportedAuxiliaryCheckpoints {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub epoch_length: u64,
    pub bounty: Coin,
}

#[cw_serde]
pub struct ReportedBlockResponse {
    pub block: Option<ReportedBlock>,
}

#[cw_serde]
pub struct ReportedCheckpointResponse {
    pub checkpoint: Option<ReportedCheckpoint>,
}

#[cw_serde]
pub struct ReportedBlocksResponse {
    pub blocks: Vec<ReportedBlock>,
}

#[cw_serde]
pub struct ReportedCheckpointsResponse {
    pub checkpoints: Vec<ReportedCheckpoint>,
}
