//! SentenceGraph: immutable labeled dependency graph of one sentence.
//!
//! ```text
//! parse ──▶ SentenceGraph ──search_and_merge──▶ SentenceGraph'
//!                        └──merge_and_label───▶ SentenceGraph''
//! ```
//!
//! Nodes live in an arena keyed by stable [`NodeId`]s. A merge keeps the id
//! of its first node, removes the others, and rewires edges around the
//! collapsed span. The follows order is the surviving ids in their original
//! relative order.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use veridical_contract::{NodeId, ParsedSentence};

use super::edge::DepEdge;
use super::index::GraphIndex;
use super::node::{LabeledRow, Node};
use super::GraphError;
use crate::{Error, Result};

/// What phrase search does with a candidate whose window runs past the end
/// of the sentence.
///
/// `SkipOverrun` measures the window by position among surviving nodes.
/// `AbortOnOverrun` keeps the legacy bound: the candidate's token id plus the
/// phrase length is compared with the surviving node count, so after a
/// merge leaves gaps in the ids a late candidate can stop the scan even
/// though its window would fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Skip the candidate and keep scanning.
    #[default]
    SkipOverrun,
    /// Stop scanning and return the graph unchanged once
    /// `id + phrase.len()` exceeds the node count.
    AbortOnOverrun,
}

#[derive(Clone, Copy, Debug)]
enum MatchField {
    Text,
    Lemma,
}

impl MatchField {
    fn of(self, node: &Node) -> &str {
        match self {
            MatchField::Text => &node.text,
            MatchField::Lemma => &node.lemma,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SentenceGraph {
    nodes: BTreeMap<NodeId, Node>,
    order: Vec<NodeId>,
    edges: BTreeSet<DepEdge>,
    index: GraphIndex,
}

impl PartialEq for SentenceGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.order == other.order && self.edges == other.edges
    }
}

impl Eq for SentenceGraph {}

impl SentenceGraph {
    /// Build a graph from the parser's output.
    ///
    /// Surface text is lowercased. A token whose head is itself becomes a
    /// root pointing at [`NodeId::ROOT`].
    pub fn from_parse(sentence: &ParsedSentence) -> Result<Self> {
        let mut nodes = BTreeMap::new();
        for token in &sentence.tokens {
            let id = node_id(token.index)?;
            let node = Node::new(id, token.text.to_lowercase(), token.lemma.clone(), token.pos.clone());
            if nodes.insert(id, node).is_some() {
                return Err(Error::InvalidParse(format!(
                    "duplicate token index {}",
                    token.index
                )));
            }
        }

        let mut edges = BTreeSet::new();
        for token in &sentence.tokens {
            let daughter = node_id(token.index)?;
            let head = if token.is_root() {
                NodeId::ROOT
            } else {
                let head = node_id(token.head)?;
                if !nodes.contains_key(&head) {
                    return Err(Error::InvalidParse(format!(
                        "token {} points at missing head {}",
                        token.index, token.head
                    )));
                }
                head
            };
            edges.insert(DepEdge::new(daughter, head, token.dep.clone()));
        }

        // BTreeMap keys are already in index order
        let order = nodes.keys().copied().collect();
        Ok(Self::from_parts(nodes, order, edges))
    }

    fn from_parts(nodes: BTreeMap<NodeId, Node>, order: Vec<NodeId>, edges: BTreeSet<DepEdge>) -> Self {
        let index = GraphIndex::build(&nodes, &order, &edges);
        Self {
            nodes,
            order,
            edges,
            index,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in sentence order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Surviving ids in sentence order.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    pub fn edges(&self) -> impl Iterator<Item = &DepEdge> + '_ {
        self.edges.iter()
    }

    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    /// Follows relation: each adjacent (earlier, later) pair.
    pub fn follows(&self) -> Vec<(NodeId, NodeId)> {
        self.order.windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// `(daughter, relation)` for every edge headed by `head`.
    pub fn get_children(&self, head: NodeId) -> BTreeSet<(NodeId, String)> {
        self.index
            .children(head)
            .map(|(d, rel)| (d, rel.to_string()))
            .collect()
    }

    /// `(head, relation)` for every edge leaving `daughter`.
    pub fn get_heads(&self, daughter: NodeId) -> BTreeSet<(NodeId, String)> {
        self.index
            .heads(daughter)
            .map(|(h, rel)| (h, rel.to_string()))
            .collect()
    }

    pub fn nodes_with_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.index.ids_with_label(label)
    }

    /// One row per node: `id text [labels] [pos]`.
    pub fn labeled_rows(&self) -> Vec<LabeledRow> {
        self.nodes().map(LabeledRow::from).collect()
    }

    // ========================================================================
    // PHRASE SEARCH
    // ========================================================================

    /// Merge the first window whose surface text matches `phrase` and label it.
    ///
    /// Returns an identical graph when nothing matches.
    pub fn search_and_merge<S: AsRef<str>>(&self, phrase: &[S], label: &str) -> Self {
        self.search_window(phrase, label, MatchField::Text, ScanPolicy::default())
    }

    /// [`search_and_merge`](Self::search_and_merge) matching lemmas instead of surface text.
    pub fn search_and_merge_lemmas<S: AsRef<str>>(&self, phrase: &[S], label: &str) -> Self {
        self.search_window(phrase, label, MatchField::Lemma, ScanPolicy::default())
    }

    pub fn search_and_merge_with<S: AsRef<str>>(
        &self,
        phrase: &[S],
        label: &str,
        policy: ScanPolicy,
    ) -> Self {
        self.search_window(phrase, label, MatchField::Text, policy)
    }

    pub fn search_and_merge_lemmas_with<S: AsRef<str>>(
        &self,
        phrase: &[S],
        label: &str,
        policy: ScanPolicy,
    ) -> Self {
        self.search_window(phrase, label, MatchField::Lemma, policy)
    }

    fn search_window<S: AsRef<str>>(
        &self,
        phrase: &[S],
        label: &str,
        field: MatchField,
        policy: ScanPolicy,
    ) -> Self {
        let Some(first) = phrase.first() else {
            return self.clone();
        };
        let candidates = match field {
            MatchField::Text => self.index.ids_with_text(first.as_ref()),
            MatchField::Lemma => self.index.ids_with_lemma(first.as_ref()),
        };

        for &start in candidates {
            if policy == ScanPolicy::AbortOnOverrun
                && usize::try_from(start.raw()).is_ok_and(|raw| raw + phrase.len() > self.order.len())
            {
                return self.clone();
            }
            let Some(pos) = self.index.position(start) else {
                continue;
            };
            let end = pos + phrase.len();
            if end > self.order.len() {
                continue;
            }

            let window = &self.order[pos..end];
            let matches = window.iter().zip(phrase).all(|(id, want)| {
                self.nodes
                    .get(id)
                    .is_some_and(|node| field.of(node) == want.as_ref())
            });
            if matches {
                return self.merge_unchecked(window, label);
            }
        }

        self.clone()
    }

    // ========================================================================
    // MERGE
    // ========================================================================

    /// Label `node_ids[0]` and fold the remaining ids into it.
    ///
    /// With a single id this only adds the label.
    pub fn merge_and_label_node_ids(&self, node_ids: &[NodeId], label: &str) -> std::result::Result<Self, GraphError> {
        if node_ids.is_empty() {
            return Err(GraphError::EmptyMerge);
        }
        let mut seen = HashSet::with_capacity(node_ids.len());
        for &id in node_ids {
            if !self.nodes.contains_key(&id) {
                return Err(GraphError::UnknownNode(id));
            }
            if !seen.insert(id) {
                return Err(GraphError::DuplicateNode(id));
            }
        }
        Ok(self.merge_unchecked(node_ids, label))
    }

    /// Caller guarantees `node_ids` is non-empty, distinct and present.
    fn merge_unchecked(&self, node_ids: &[NodeId], label: &str) -> Self {
        let target = node_ids[0];
        let mut nodes = self.nodes.clone();

        if node_ids.len() == 1 {
            if let Some(node) = nodes.get_mut(&target) {
                node.labels.insert(label.to_string());
            }
            return Self::from_parts(nodes, self.order.clone(), self.edges.clone());
        }

        let merged: HashSet<NodeId> = node_ids.iter().copied().collect();
        let text = self.joined(node_ids, |n| &n.text);
        let lemma = self.joined(node_ids, |n| &n.lemma);
        let pos = self.span_head_pos(node_ids, &merged);

        for id in &node_ids[1..] {
            nodes.remove(id);
        }
        if let Some(node) = nodes.get_mut(&target) {
            node.text = text;
            node.lemma = lemma;
            node.pos = pos;
            node.labels.insert(label.to_string());
        }

        let edges = self
            .edges
            .iter()
            .filter_map(|edge| {
                match (merged.contains(&edge.daughter), merged.contains(&edge.head)) {
                    (true, true) => None,
                    (false, true) => Some(edge.with_head(target)),
                    (true, false) => Some(edge.with_daughter(target)),
                    (false, false) => Some(edge.clone()),
                }
            })
            .collect();

        let order = self
            .order
            .iter()
            .copied()
            .filter(|id| *id == target || !merged.contains(id))
            .collect();

        Self::from_parts(nodes, order, edges)
    }

    fn joined(&self, node_ids: &[NodeId], field: impl Fn(&Node) -> &str) -> String {
        node_ids
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .map(field)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// POS of the span's syntactic head: the first listed node with an edge
    /// leaving the span, else the last listed node.
    fn span_head_pos(&self, node_ids: &[NodeId], merged: &HashSet<NodeId>) -> String {
        let head = node_ids
            .iter()
            .copied()
            .find(|id| self.index.heads(*id).any(|(h, _)| !merged.contains(&h)))
            .or_else(|| node_ids.last().copied());
        head.and_then(|id| self.nodes.get(&id))
            .map(|n| n.pos.clone())
            .unwrap_or_default()
    }
}

impl fmt::Display for SentenceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.labeled_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

fn node_id(index: usize) -> Result<NodeId> {
    i64::try_from(index)
        .map(NodeId)
        .map_err(|_| Error::InvalidParse(format!("token index {} out of range", index)))
}
