//! Merkle-Patricia inclusion-proof verification.
//!
//! Verification is a boolean predicate: a failing proof is an expected
//! outcome, not an error. Any malformed input decodes to `false`.

use crate::hash::keccak256;
use crate::nibbles::decode_compact;
use crate::node::ProofNode;
use crate::rlp;

/// Check that `value` is stored under the path `encoded_path` in the trie
/// committed to by `root`.
///
/// `proof` is an RLP list of serialized trie nodes ordered root-first.
/// Each node's serialization must hash to the reference its parent holds
/// (to `root` for the first node), and the path must be fully consumed at
/// a node carrying exactly `value`. The walk is iterative; proof depth is
/// bounded by the node count, never by recursion.
pub fn verify(value: &[u8], encoded_path: &[u8], proof: &[u8], root: &[u8; 32]) -> bool {
    let Some((path, _)) = decode_compact(encoded_path) else {
        return false;
    };
    let Some(nodes) = rlp::Item::parse(proof).and_then(|outer| outer.items()) else {
        return false;
    };
    if nodes.is_empty() {
        return false;
    }

    let mut expected_ref = *root;
    let mut consumed = 0usize;

    for (index, raw_node) in nodes.iter().enumerate() {
        let raw = raw_node.raw();
        if keccak256(raw) != expected_ref {
            return false;
        }
        let Some(node) = ProofNode::decode(raw) else {
            return false;
        };
        let is_last = index + 1 == nodes.len();

        match node {
            ProofNode::Leaf { path: rest, value: stored } => {
                return is_last && rest == path[consumed..] && stored == value;
            }
            ProofNode::Extension { path: shared, child } => {
                if is_last || !path[consumed..].starts_with(&shared) {
                    return false;
                }
                consumed += shared.len();
                expected_ref = child;
            }
            ProofNode::Branch { children, value: stored } => {
                if consumed == path.len() {
                    // key ends at this branch; the value slot must hold it
                    return is_last && stored.as_deref() == Some(value);
                }
                if is_last {
                    return false;
                }
                let Some(child) = children[path[consumed] as usize] else {
                    return false;
                };
                consumed += 1;
                expected_ref = child;
            }
        }
    }
    false
}
