//! Graph module - Sentence Dependency Graph
//!
//! Nodes = tokens (or merged spans of tokens), keyed by stable ids
//! Edges = (daughter, head, relation) dependency tuples
//! Order = follows relation over surviving nodes
//!
//! Every rewrite returns a new [`SentenceGraph`]; indices are rebuilt from the
//! primary facts each time and never patched in place.

mod edge;
mod index;
mod node;
mod sentence;

pub use edge::DepEdge;
pub use index::GraphIndex;
pub use node::{LabeledRow, Node};
pub use sentence::{ScanPolicy, SentenceGraph};

use veridical_contract::NodeId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Merge requires at least one node id")]
    EmptyMerge,
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
    #[error("Node listed twice in merge: {0}")]
    DuplicateNode(NodeId),
}
