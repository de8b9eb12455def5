//! Dependency edges

use serde::Serialize;
use veridical_contract::NodeId;

/// `daughter -relation-> head`
///
/// Ordered by daughter first, so iterating a set of edges walks the sentence
/// left to right.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DepEdge {
    pub daughter: NodeId,
    pub head: NodeId,
    pub relation: String,
}

impl DepEdge {
    pub fn new(daughter: NodeId, head: NodeId, relation: impl Into<String>) -> Self {
        Self {
            daughter,
            head,
            relation: relation.into(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.head.is_root()
    }

    /// Same edge re-attached to a different daughter.
    pub fn with_daughter(&self, daughter: NodeId) -> Self {
        Self::new(daughter, self.head, self.relation.clone())
    }

    /// Same edge re-attached to a different head.
    pub fn with_head(&self, head: NodeId) -> Self {
        Self::new(self.daughter, head, self.relation.clone())
    }
}
