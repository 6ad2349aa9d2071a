//! Round-trip coverage for the proof verifier against the paired trie
//! builder, over a spread of path and value lengths and node shapes.

use common::nibbles::encode_compact;
use common::testing::{BuiltTrie, TrieBuilder};
use common::{keccak256, verify};

const TEST_PATH_LENGTHS: [usize; 9] = [1, 2, 3, 5, 8, 13, 21, 34, 55];
const TEST_VALUE_LENGTHS: [usize; 9] = [1, 2, 3, 5, 8, 13, 21, 34, 55];

/// Deterministic byte stream derived from a seed, so fixtures are stable
/// without pulling in a randomness dependency.
fn pseudo_bytes(seed: &str, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut block = keccak256(seed.as_bytes());
    while out.len() < len {
        out.extend_from_slice(&block);
        block = keccak256(&block);
    }
    out.truncate(len);
    out
}

fn pseudo_nibbles(seed: &str, len: usize) -> Vec<u8> {
    pseudo_bytes(seed, len).iter().map(|b| b & 0x0F).collect()
}

fn assert_roundtrip(trie: &BuiltTrie, path: &[u8], value: &[u8]) {
    let root = trie.root();
    let proof = trie.prove(path);
    let encoded_path = encode_compact(path, true).unwrap();
    assert!(
        verify(value, &encoded_path, &proof, &root),
        "honest proof rejected for path {path:?}"
    );
    // a proof never attests a different value
    let mut wrong = value.to_vec();
    wrong[0] ^= 0xFF;
    assert!(!verify(&wrong, &encoded_path, &proof, &root));
}

/// Pattern `l`: the whole key sits in a single leaf.
#[test]
fn roundtrip_single_leaf() {
    for &path_len in &TEST_PATH_LENGTHS {
        for &value_len in &TEST_VALUE_LENGTHS {
            let path = pseudo_nibbles(&format!("leaf-path-{path_len}-{value_len}"), path_len);
            let value = pseudo_bytes(&format!("leaf-value-{path_len}-{value_len}"), value_len);

            let trie = TrieBuilder::new().insert(path.clone(), value.clone()).build();
            assert_roundtrip(&trie, &path, &value);
        }
    }
}

/// Pattern `bl`: keys diverge on the first nibble, so the proof walks a
/// branch before the leaf.
#[test]
fn roundtrip_branch_then_leaf() {
    for &path_len in &TEST_PATH_LENGTHS {
        if path_len < 2 {
            // a one-nibble key leaves no remaining path below a branch
            continue;
        }
        for &value_len in &TEST_VALUE_LENGTHS {
            let mut path = pseudo_nibbles(&format!("bl-path-{path_len}-{value_len}"), path_len);
            path[0] = 0x3;
            let mut sibling = path.clone();
            sibling[0] = 0xC;

            let value = pseudo_bytes(&format!("bl-value-{path_len}-{value_len}"), value_len);

            let trie = TrieBuilder::new()
                .insert(path.clone(), value.clone())
                .insert(sibling, vec![0xEE])
                .build();
            assert_roundtrip(&trie, &path, &value);
        }
    }
}

/// Pattern `ebl`: a shared two-nibble prefix forces an extension above
/// the branch.
#[test]
fn roundtrip_extension_branch_leaf() {
    for &path_len in &TEST_PATH_LENGTHS {
        if path_len < 4 {
            continue;
        }
        for &value_len in &TEST_VALUE_LENGTHS {
            let mut path = pseudo_nibbles(&format!("ebl-path-{path_len}-{value_len}"), path_len);
            path[2] = 0x1;
            let mut sibling = path.clone();
            sibling[2] = 0xE;

            let value = pseudo_bytes(&format!("ebl-value-{path_len}-{value_len}"), value_len);

            let trie = TrieBuilder::new()
                .insert(path.clone(), value.clone())
                .insert(sibling, vec![0xEE])
                .build();
            assert_roundtrip(&trie, &path, &value);
        }
    }
}

/// A wider trie with several diverging keys, walked for every key.
#[test]
fn roundtrip_wide_trie() {
    let mut builder = TrieBuilder::new();
    let mut keys = Vec::new();
    for i in 0u8..12 {
        let mut path = pseudo_nibbles(&format!("wide-{i}"), 16);
        path[0] = i; // force divergence at the root branch
        let value = pseudo_bytes(&format!("wide-value-{i}"), 7);
        builder = builder.insert(path.clone(), value.clone());
        keys.push((path, value));
    }

    let trie = builder.build();
    for (path, value) in &keys {
        assert_roundtrip(&trie, path, value);
    }
}
