//! Honest trie construction for tests.
//!
//! Builds a Merkle-Patricia trie over a set of nibble-path/value pairs
//! and extracts inclusion proofs in the wire format `proof::verify`
//! consumes. This is the paired generation algorithm the verifier's
//! round-trip property is stated against; it only ever produces the
//! shapes the verifier accepts (32-byte child references, non-empty
//! leaf paths and values).
//!
//! Construction panics on misuse (duplicate keys, empty values, or key
//! sets that would leave a leaf with an empty remaining path); this
//! module backs tests, where loud failure beats a silent bad fixture.

use crate::hash::keccak256;
use crate::node::ProofNode;
use crate::rlp;

/// Collects nibble-path/value pairs and builds a [`BuiltTrie`].
#[derive(Default)]
pub struct TrieBuilder {
    pairs: Vec<(Vec<u8>, Vec<u8>)>,
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key/value pair. `path` is the key as nibbles.
    pub fn insert(mut self, path: Vec<u8>, value: Vec<u8>) -> Self {
        assert!(!path.is_empty(), "trie key must not be empty");
        assert!(path.iter().all(|&n| n <= 0x0F), "trie key must be nibbles");
        assert!(!value.is_empty(), "trie value must not be empty");
        assert!(
            self.pairs.iter().all(|(existing, _)| existing != &path),
            "duplicate trie key"
        );
        self.pairs.push((path, value));
        self
    }

    pub fn build(self) -> BuiltTrie {
        assert!(!self.pairs.is_empty(), "trie must hold at least one pair");
        BuiltTrie {
            root: build_node(self.pairs),
        }
    }
}

/// A constructed trie, ready to hand out its root and per-key proofs.
pub struct BuiltTrie {
    root: Node,
}

impl BuiltTrie {
    /// Root commitment of the trie.
    pub fn root(&self) -> [u8; 32] {
        self.root.hash()
    }

    /// Extract the proof for `path` as an RLP list of serialized nodes,
    /// ordered root-first. Panics if the key was never inserted.
    pub fn prove(&self, path: &[u8]) -> Vec<u8> {
        let mut nodes: Vec<Vec<u8>> = Vec::new();
        let mut current = &self.root;
        let mut rest: &[u8] = path;

        loop {
            nodes.push(current.encode());
            match current {
                Node::Leaf { path: remaining, .. } => {
                    assert_eq!(remaining.as_slice(), rest, "key not present in trie");
                    break;
                }
                Node::Extension { path: shared, child } => {
                    assert!(rest.starts_with(shared), "key not present in trie");
                    rest = &rest[shared.len()..];
                    current = child;
                }
                Node::Branch { children, value } => {
                    if rest.is_empty() {
                        assert!(value.is_some(), "key not present in trie");
                        break;
                    }
                    current = children[rest[0] as usize]
                        .as_deref()
                        .expect("key not present in trie");
                    rest = &rest[1..];
                }
            }
        }
        rlp::encode_list(&nodes)
    }
}

enum Node {
    Leaf {
        path: Vec<u8>,
        value: Vec<u8>,
    },
    Extension {
        path: Vec<u8>,
        child: Box<Node>,
    },
    Branch {
        children: Box<[Option<Box<Node>>; 16]>,
        value: Option<Vec<u8>>,
    },
}

impl Node {
    fn encode(&self) -> Vec<u8> {
        self.to_proof_node().encode()
    }

    fn hash(&self) -> [u8; 32] {
        keccak256(&self.encode())
    }

    fn to_proof_node(&self) -> ProofNode {
        match self {
            Node::Leaf { path, value } => ProofNode::Leaf {
                path: path.clone(),
                value: value.clone(),
            },
            Node::Extension { path, child } => ProofNode::Extension {
                path: path.clone(),
                child: child.hash(),
            },
            Node::Branch { children, value } => {
                let mut refs = Box::new([None; 16]);
                for (slot, child) in refs.iter_mut().zip(children.iter()) {
                    *slot = child.as_ref().map(|c| c.hash());
                }
                ProofNode::Branch {
                    children: refs,
                    value: value.clone(),
                }
            }
        }
    }
}

fn build_node(mut pairs: Vec<(Vec<u8>, Vec<u8>)>) -> Node {
    if pairs.len() == 1 {
        let (path, value) = pairs.pop().expect("checked non-empty");
        assert!(
            !path.is_empty(),
            "key set leaves a leaf with an empty remaining path"
        );
        return Node::Leaf { path, value };
    }

    let prefix_len = common_prefix_len(&pairs);
    if prefix_len > 0 {
        let prefix = pairs[0].0[..prefix_len].to_vec();
        let stripped = pairs
            .into_iter()
            .map(|(path, value)| (path[prefix_len..].to_vec(), value))
            .collect();
        return Node::Extension {
            path: prefix,
            child: Box::new(build_branch(stripped)),
        };
    }
    build_branch(pairs)
}

fn build_branch(pairs: Vec<(Vec<u8>, Vec<u8>)>) -> Node {
    let mut groups: [Vec<(Vec<u8>, Vec<u8>)>; 16] = std::array::from_fn(|_| Vec::new());
    let mut value = None;

    for (path, v) in pairs {
        match path.split_first() {
            Some((&nibble, rest)) => groups[nibble as usize].push((rest.to_vec(), v)),
            None => value = Some(v),
        }
    }

    let mut children: [Option<Box<Node>>; 16] = std::array::from_fn(|_| None);
    for (slot, group) in children.iter_mut().zip(groups) {
        if !group.is_empty() {
            *slot = Some(Box::new(build_node(group)));
        }
    }
    Node::Branch {
        children: Box::new(children),
        value,
    }
}

/// Longest nibble prefix shared by every path in `pairs`.
fn common_prefix_len(pairs: &[(Vec<u8>, Vec<u8>)]) -> usize {
    let (first, _) = &pairs[0];
    let mut len = first.len();
    for (path, _) in &pairs[1..] {
        let shared = first
            .iter()
            .zip(path.iter())
            .take_while(|(a, b)| a == b)
            .count();
        len = len.min(shared);
    }
    len
}
