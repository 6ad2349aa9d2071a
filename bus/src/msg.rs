//! Message types for the Span message bus contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::state::{MessageEntry, MessageStatus};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the state anchor contract trusted for proof roots
    pub anchor: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Outbox (sender side)
    // ========================================================================
    /// Declare a new outbox message.
    ///
    /// The caller is the sender; `nonce` must be the sender's next
    /// expected nonce and no non-terminal message may be outstanding.
    /// The response data carries the derived 32-byte message hash.
    DeclareMessage {
        /// 32-byte commitment to the workflow payload
        intent_hash: Binary,
        /// The sender's next nonce
        nonce: u64,
        /// Reimbursement price, carried through the digest
        gas_price: Uint128,
        /// Reimbursement limit, carried through the digest
        gas_limit: Uint128,
        /// 32-byte keccak256 commitment to the unlock secret, non-zero
        hash_lock: Binary,
    },

    /// Progress a declared outbox message by revealing the unlock secret.
    ProgressOutbox {
        message_hash: Binary,
        unlock_secret: Binary,
    },

    /// Progress a declared outbox message with a proof that the
    /// counterpart inbox entry is Declared or Progressed under an
    /// anchored origin state root.
    ProgressOutboxWithProof {
        message_hash: Binary,
        /// Counterpart inbox status the proof attests
        inbox_status: MessageStatus,
        /// Anchored 32-byte state root the proof is checked against
        state_root: Binary,
        /// RLP list of serialized trie nodes, root first
        proof: Binary,
    },

    /// Route a declared outbox message into revocation.
    ///
    /// Only the original sender may call this, and only while the
    /// message is exactly Declared.
    DeclareRevocation { message_hash: Binary },

    /// Complete a declared revocation by revealing the unlock secret.
    ProgressOutboxRevocation {
        message_hash: Binary,
        unlock_secret: Binary,
    },

    // ========================================================================
    // Inbox (receiver side, proof-gated)
    // ========================================================================
    /// Confirm a counterpart outbox declaration into the inbox.
    ///
    /// The message hash is recomputed from the fields; the proof must
    /// attest a Declared outbox entry for it under `state_root`, which
    /// must have been recorded by the anchor.
    ConfirmMessage {
        intent_hash: Binary,
        nonce: u64,
        gas_price: Uint128,
        gas_limit: Uint128,
        /// Originator identity on the counterpart chain
        sender: String,
        /// 32-byte keccak256 commitment to the unlock secret, non-zero
        hash_lock: Binary,
        state_root: Binary,
        proof: Binary,
    },

    /// Progress a confirmed inbox message by revealing the unlock secret.
    ProgressInbox {
        message_hash: Binary,
        unlock_secret: Binary,
    },

    /// Progress a confirmed inbox message with a proof of the
    /// counterpart outbox status (Declared or Progressed).
    ProgressInboxWithProof {
        message_hash: Binary,
        /// Counterpart outbox status the proof attests
        outbox_status: MessageStatus,
        state_root: Binary,
        proof: Binary,
    },

    /// Confirm a counterpart revocation, revoking the inbox message.
    ///
    /// The proof must attest a DeclaredRevocation outbox entry; only a
    /// Declared inbox message can be revoked.
    ConfirmRevocation {
        message_hash: Binary,
        state_root: Binary,
        proof: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// One outbox entry, if any
    #[returns(MessageResponse)]
    OutboxMessage { message_hash: Binary },

    /// One inbox entry, if any
    #[returns(MessageResponse)]
    InboxMessage { message_hash: Binary },

    /// Registry status of an outbox entry (Undeclared when absent)
    #[returns(StatusResponse)]
    OutboxStatus { message_hash: Binary },

    /// Registry status of an inbox entry (Undeclared when absent)
    #[returns(StatusResponse)]
    InboxStatus { message_hash: Binary },

    /// The next nonce a sender's declaration must carry
    #[returns(NextNonceResponse)]
    NextNonce { sender: String },

    /// Derive the message hash for a set of identifying fields.
    /// Pure; does not read registry state.
    #[returns(MessageHashResponse)]
    MessageHash {
        intent_hash: Binary,
        nonce: u64,
        gas_price: Uint128,
        gas_limit: Uint128,
        sender: String,
    },

    /// Run the Merkle-Patricia proof verifier. Pure predicate; never
    /// errors on a failing proof.
    #[returns(VerifyProofResponse)]
    VerifyProof {
        value: Binary,
        encoded_path: Binary,
        proof: Binary,
        root: Binary,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub anchor: String,
}

#[cw_serde]
pub struct MessageResponse {
    pub entry: Option<MessageEntry>,
}

#[cw_serde]
pub struct StatusResponse {
    pub status: MessageStatus,
}

#[cw_serde]
pub struct NextNonceResponse {
    pub next_nonce: u64,
}

#[cw_serde]
pub struct MessageHashResponse {
    pub message_hash: Binary,
}

#[cw_serde]
pub struct VerifyProofResponse {
    pub valid: bool,
}
