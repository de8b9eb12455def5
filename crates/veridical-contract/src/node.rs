//! Node identifiers.
//!
//! Ids start out as the parser's token indices and stay stable through
//! merges, so after a few rewrites the id space is sparse. Never use an id as
//! a position.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable node identifier inside a sentence graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl NodeId {
    /// Sentinel head of root nodes ("no head").
    pub const ROOT: NodeId = NodeId(-1);

    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> i64 {
        self.0
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl From<i64> for NodeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
