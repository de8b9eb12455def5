//! Secondary indices over a sentence graph.
//!
//! Derived entirely from (nodes, order, edges). Rebuilt for every new graph.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use veridical_contract::NodeId;

use super::edge::DepEdge;
use super::node::Node;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphIndex {
    /// id → position in the follows order
    position: HashMap<NodeId, usize>,
    /// surface text → ids, sentence order
    by_text: HashMap<String, Vec<NodeId>>,
    /// lemma → ids, sentence order
    by_lemma: HashMap<String, Vec<NodeId>>,
    /// relation → (daughter, head)
    by_relation: HashMap<String, BTreeSet<(NodeId, NodeId)>>,
    /// head → (daughter, relation)
    children: HashMap<NodeId, BTreeSet<(NodeId, String)>>,
    /// daughter → (head, relation)
    heads: HashMap<NodeId, BTreeSet<(NodeId, String)>>,
    /// label → ids
    by_label: HashMap<String, BTreeSet<NodeId>>,
}

impl GraphIndex {
    pub fn build(
        nodes: &BTreeMap<NodeId, Node>,
        order: &[NodeId],
        edges: &BTreeSet<DepEdge>,
    ) -> Self {
        let mut index = Self::default();

        for (pos, id) in order.iter().enumerate() {
            index.position.insert(*id, pos);
            if let Some(node) = nodes.get(id) {
                index.by_text.entry(node.text.clone()).or_default().push(*id);
                index.by_lemma.entry(node.lemma.clone()).or_default().push(*id);
                for label in &node.labels {
                    index.by_label.entry(label.clone()).or_default().insert(*id);
                }
            }
        }

        for edge in edges {
            index
                .by_relation
                .entry(edge.relation.clone())
                .or_default()
                .insert((edge.daughter, edge.head));
            index
                .children
                .entry(edge.head)
                .or_default()
                .insert((edge.daughter, edge.relation.clone()));
            index
                .heads
                .entry(edge.daughter)
                .or_default()
                .insert((edge.head, edge.relation.clone()));
        }

        index
    }

    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.position.get(&id).copied()
    }

    pub fn ids_with_text(&self, text: &str) -> &[NodeId] {
        self.by_text.get(text).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn ids_with_lemma(&self, lemma: &str) -> &[NodeId] {
        self.by_lemma.get(lemma).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edges_with_relation(&self, relation: &str) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.by_relation
            .get(relation)
            .into_iter()
            .flat_map(|pairs| pairs.iter().copied())
    }

    pub fn children(&self, head: NodeId) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.children
            .get(&head)
            .into_iter()
            .flat_map(|set| set.iter().map(|(d, rel)| (*d, rel.as_str())))
    }

    pub fn heads(&self, daughter: NodeId) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.heads
            .get(&daughter)
            .into_iter()
            .flat_map(|set| set.iter().map(|(h, rel)| (*h, rel.as_str())))
    }

    pub fn ids_with_label(&self, label: &str) -> impl Iterator<Item = NodeId> + '_ {
        self.by_label
            .get(label)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
