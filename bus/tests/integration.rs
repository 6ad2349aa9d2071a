//! End-to-end scenarios wiring the message bus to the state anchor:
//! a full declare → anchor → confirm → progress handoff, and the
//! revocation detour, exercising both registries of one bus the way the
//! paired deployments on two chains would.

use cosmwasm_std::{coins, Addr, Binary, Coin, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use bus::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, StatusResponse};
use bus::state::MessageStatus;
use common::nibbles::bytes_to_nibbles;
use common::testing::TrieBuilder;
use common::keccak256;

const BOUNTY_DENOM: &str = "uluna";
const BOUNTY_AMOUNT: u128 = 1_000_000;
const GAS_PRICE: u128 = 200;
const GAS_LIMIT: u128 = 900_000;

fn contract_bus() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        bus::contract::execute,
        bus::contract::instantiate,
        bus::contract::query,
    );
    Box::new(contract)
}

fn contract_anchor() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        anchor::contract::execute,
        anchor::contract::instantiate,
        anchor::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    bus: Addr,
    anchor: Addr,
    sender: Addr,
    relayer: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let sender = Addr::unchecked("terra1sender");
    let relayer = Addr::unchecked("terra1relayer");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &relayer, coins(10_000_000_000, BOUNTY_DENOM))
            .unwrap();
    });

    let anchor_code = app.store_code(contract_anchor());
    let anchor_addr = app
        .instantiate_contract(
            anchor_code,
            relayer.clone(),
            &anchor::msg::InstantiateMsg {
                epoch_length: 100,
                bounty: Coin {
                    denom: BOUNTY_DENOM.to_string(),
                    amount: Uint128::from(BOUNTY_AMOUNT),
                },
            },
            &[],
            "span-anchor",
            None,
        )
        .unwrap();

    let bus_code = app.store_code(contract_bus());
    let bus_addr = app
        .instantiate_contract(
            bus_code,
            relayer.clone(),
            &InstantiateMsg {
                anchor: anchor_addr.to_string(),
            },
            &[],
            "span-bus",
            None,
        )
        .unwrap();

    TestEnv {
        app,
        bus: bus_addr,
        anchor: anchor_addr,
        sender,
        relayer,
    }
}

fn declare(env: &mut TestEnv, nonce: u64, secret: &[u8]) -> [u8; 32] {
    let res = env
        .app
        .execute_contract(
            env.sender.clone(),
            env.bus.clone(),
            &ExecuteMsg::DeclareMessage {
                intent_hash: Binary::from(keccak256(b"stake intent").to_vec()),
                nonce,
                gas_price: Uint128::from(GAS_PRICE),
                gas_limit: Uint128::from(GAS_LIMIT),
                hash_lock: Binary::from(keccak256(secret).to_vec()),
            },
            &[],
        )
        .unwrap();
    res.data
        .expect("declare must return the message hash")
        .as_slice()
        .try_into()
        .unwrap()
}

/// A relayer's view of the counterpart registry: one-entry trie mapping
/// the hashed message hash to the status byte.
fn registry_proof(message_hash: &[u8; 32], status: MessageStatus) -> (Binary, Binary) {
    let path = bytes_to_nibbles(&keccak256(message_hash));
    let trie = TrieBuilder::new()
        .insert(path.clone(), vec![status.as_byte()])
        .build();
    let proof = trie.prove(&path);
    (Binary::from(trie.root().to_vec()), Binary::from(proof))
}

fn anchor_root(env: &mut TestEnv, height: u64, state_root: Binary) {
    env.app
        .execute_contract(
            env.relayer.clone(),
            env.anchor.clone(),
            &anchor::msg::ExecuteMsg::ReportOriginBlock { height, state_root },
            &coins(BOUNTY_AMOUNT, BOUNTY_DENOM),
        )
        .unwrap();
}

fn confirm(env: &mut TestEnv, nonce: u64, secret: &[u8], state_root: Binary, proof: Binary) {
    env.app
        .execute_contract(
            env.relayer.clone(),
            env.bus.clone(),
            &ExecuteMsg::ConfirmMessage {
                intent_hash: Binary::from(keccak256(b"stake intent").to_vec()),
                nonce,
                gas_price: Uint128::from(GAS_PRICE),
                gas_limit: Uint128::from(GAS_LIMIT),
                sender: env.sender.to_string(),
                hash_lock: Binary::from(keccak256(secret).to_vec()),
                state_root,
                proof,
            },
            &[],
        )
        .unwrap();
}

fn outbox_status(env: &TestEnv, message_hash: &[u8; 32]) -> MessageStatus {
    let res: StatusResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bus,
            &QueryMsg::OutboxStatus {
                message_hash: Binary::from(message_hash.to_vec()),
            },
        )
        .unwrap();
    res.status
}

fn inbox_status(env: &TestEnv, message_hash: &[u8; 32]) -> MessageStatus {
    let res: StatusResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bus,
            &QueryMsg::InboxStatus {
                message_hash: Binary::from(message_hash.to_vec()),
            },
        )
        .unwrap();
    res.status
}

/// The full handoff: declare on the outbox, anchor the counterpart view,
/// confirm on the inbox, reveal the secret on the outbox, prove the
/// progression back into the inbox.
#[test]
fn full_message_handoff() {
    let mut env = setup();
    let secret = b"handoff secret";

    // sender declares; the registries are independent from the start
    let message_hash = declare(&mut env, 1, secret);
    assert_eq!(outbox_status(&env, &message_hash), MessageStatus::Declared);
    assert_eq!(inbox_status(&env, &message_hash), MessageStatus::Undeclared);

    // a relayer anchors the declaring chain's root and confirms
    let (declared_root, declared_proof) = registry_proof(&message_hash, MessageStatus::Declared);
    anchor_root(&mut env, 100, declared_root.clone());
    confirm(&mut env, 1, secret, declared_root, declared_proof);
    assert_eq!(inbox_status(&env, &message_hash), MessageStatus::Declared);

    // the sender reveals the secret on the outbox
    env.app
        .execute_contract(
            env.sender.clone(),
            env.bus.clone(),
            &ExecuteMsg::ProgressOutbox {
                message_hash: Binary::from(message_hash.to_vec()),
                unlock_secret: Binary::from(secret.to_vec()),
            },
            &[],
        )
        .unwrap();
    assert_eq!(outbox_status(&env, &message_hash), MessageStatus::Progressed);

    // a later root carries the progressed outbox; the inbox follows
    let (progressed_root, progressed_proof) =
        registry_proof(&message_hash, MessageStatus::Progressed);
    anchor_root(&mut env, 101, progressed_root.clone());
    env.app
        .execute_contract(
            env.relayer.clone(),
            env.bus.clone(),
            &ExecuteMsg::ProgressInboxWithProof {
                message_hash: Binary::from(message_hash.to_vec()),
                outbox_status: MessageStatus::Progressed,
                state_root: progressed_root,
                proof: progressed_proof,
            },
            &[],
        )
        .unwrap();
    assert_eq!(inbox_status(&env, &message_hash), MessageStatus::Progressed);
}

/// The revocation detour: a declared message is routed into revocation,
/// the inbox confirms it, and the sender completes the revocation. Only
/// then may the sender declare again.
#[test]
fn revocation_detour() {
    let mut env = setup();
    let secret = b"revoked handoff";

    let message_hash = declare(&mut env, 1, secret);

    // confirmed on the inbox before anything goes wrong
    let (declared_root, declared_proof) = registry_proof(&message_hash, MessageStatus::Declared);
    anchor_root(&mut env, 100, declared_root.clone());
    confirm(&mut env, 1, secret, declared_root, declared_proof);

    // while Declared, a second declaration from the sender stays blocked
    let err = env
        .app
        .execute_contract(
            env.sender.clone(),
            env.bus.clone(),
            &ExecuteMsg::DeclareMessage {
                intent_hash: Binary::from(keccak256(b"stake intent").to_vec()),
                nonce: 1,
                gas_price: Uint128::from(GAS_PRICE),
                gas_limit: Uint128::from(GAS_LIMIT),
                hash_lock: Binary::from(keccak256(b"another lock").to_vec()),
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Previous process not completed"));

    // the sender backs out
    env.app
        .execute_contract(
            env.sender.clone(),
            env.bus.clone(),
            &ExecuteMsg::DeclareRevocation {
                message_hash: Binary::from(message_hash.to_vec()),
            },
            &[],
        )
        .unwrap();
    assert_eq!(
        outbox_status(&env, &message_hash),
        MessageStatus::DeclaredRevocation
    );

    // the inbox learns of the revocation through a newly anchored root
    let (revocation_root, revocation_proof) =
        registry_proof(&message_hash, MessageStatus::DeclaredRevocation);
    anchor_root(&mut env, 101, revocation_root.clone());
    env.app
        .execute_contract(
            env.relayer.clone(),
            env.bus.clone(),
            &ExecuteMsg::ConfirmRevocation {
                message_hash: Binary::from(message_hash.to_vec()),
                state_root: revocation_root,
                proof: revocation_proof,
            },
            &[],
        )
        .unwrap();
    assert_eq!(inbox_status(&env, &message_hash), MessageStatus::Revoked);

    // the sender completes the revocation and is free again
    env.app
        .execute_contract(
            env.sender.clone(),
            env.bus.clone(),
            &ExecuteMsg::ProgressOutboxRevocation {
                message_hash: Binary::from(message_hash.to_vec()),
                unlock_secret: Binary::from(secret.to_vec()),
            },
            &[],
        )
        .unwrap();
    assert_eq!(outbox_status(&env, &message_hash), MessageStatus::Revoked);

    let second = declare(&mut env, 2, b"fresh secret");
    assert_eq!(outbox_status(&env, &second), MessageStatus::Declared);
}

/// The outbox can also progress on proof alone, mirroring the inbox path.
#[test]
fn outbox_progresses_with_a_proof_of_the_inbox() {
    let mut env = setup();
    let secret = b"proof progressed";

    let message_hash = declare(&mut env, 1, secret);

    // counterpart inbox confirmed the message; its chain's root is anchored
    let (inbox_root, inbox_proof) = registry_proof(&message_hash, MessageStatus::Declared);
    anchor_root(&mut env, 200, inbox_root.clone());

    env.app
        .execute_contract(
            env.sender.clone(),
            env.bus.clone(),
            &ExecuteMsg::ProgressOutboxWithProof {
                message_hash: Binary::from(message_hash.to_vec()),
                inbox_status: MessageStatus::Declared,
                state_root: inbox_root,
                proof: inbox_proof,
            },
            &[],
        )
        .unwrap();
    assert_eq!(outbox_status(&env, &message_hash), MessageStatus::Progressed);

    // terminal: the sender may declare the next message
    declare(&mut env, 2, b"next");
}
