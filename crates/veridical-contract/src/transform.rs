//! Transformation records.

use serde::{Deserialize, Serialize};

use crate::{Category, NodeId};

/// One discovered rewrite opportunity.
///
/// `node_ids[0]` is the node that survives the merge and receives the
/// proposition label; the remaining ids are folded into it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    /// Rule name, e.g. `"Verb Complement"`.
    pub name: String,
    pub category: Category,
    pub node_ids: Vec<NodeId>,
}

impl Transformation {
    pub fn new(name: impl Into<String>, category: Category, node_ids: Vec<NodeId>) -> Self {
        Self {
            name: name.into(),
            category,
            node_ids,
        }
    }

    /// Node that survives the merge.
    pub fn target(&self) -> Option<NodeId> {
        self.node_ids.first().copied()
    }

    /// `node_ids` as raw integers, handy in assertions and logs.
    pub fn raw_ids(&self) -> Vec<i64> {
        self.node_ids.iter().map(|id| id.raw()).collect()
    }
}
