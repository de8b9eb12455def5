//! Graph nodes

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use veridical_contract::NodeId;

/// A token, or a span of tokens collapsed by a merge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: NodeId,
    /// Lowercased surface text (space-joined for merged spans).
    pub text: String,
    pub lemma: String,
    pub pos: String,
    /// Free-form tags: lexicon categories, `"proposition"`.
    pub labels: BTreeSet<String>,
}

impl Node {
    pub fn new(
        id: NodeId,
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            labels: BTreeSet::new(),
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}

/// One line of the labeled debug dump: `id text [labels] [pos]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabeledRow {
    pub id: NodeId,
    pub text: String,
    pub labels: Vec<String>,
    pub pos: Vec<String>,
}

impl From<&Node> for LabeledRow {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            text: node.text.clone(),
            labels: node.labels.iter().cloned().collect(),
            pos: vec![node.pos.clone()],
        }
    }
}

impl fmt::Display for LabeledRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] [{}]",
            self.id,
            self.text,
            self.labels.join(", "),
            self.pos.join(", ")
        )
    }
}
