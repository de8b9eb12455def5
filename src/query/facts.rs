//! Fact base: the relations a query can read.

use std::collections::HashMap;

use crate::graph::SentenceGraph;

use super::goal::{Goal, Query};
use super::relation::{Relation, Value};
use super::solver::{Solution, Solutions, DEFAULT_SOLUTION_CAP};
use super::QueryError;

/// `id_text(id, text)`
pub const ID_TEXT: &str = "id_text";
/// `id_lemma(id, lemma)`
pub const ID_LEMMA: &str = "id_lemma";
/// `id_pos(id, pos)`
pub const ID_POS: &str = "id_pos";
/// `id_label(id, label)`, one tuple per label
pub const ID_LABEL: &str = "id_label";
/// `head_rel(daughter, head, relation)`, including root edges to `-1`
pub const HEAD_REL: &str = "head_rel";

#[derive(Clone, Debug, Default)]
pub struct FactBase {
    relations: HashMap<String, Relation>,
}

impl FactBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Facts for one graph, in sentence order.
    pub fn from_graph(graph: &SentenceGraph) -> Self {
        let mut fb = Self::new();
        fb.declare(ID_TEXT, 2);
        fb.declare(ID_LEMMA, 2);
        fb.declare(ID_POS, 2);
        fb.declare(ID_LABEL, 2);
        fb.declare(HEAD_REL, 3);

        for node in graph.nodes() {
            let id = Value::Node(node.id);
            fb.push(ID_TEXT, vec![id.clone(), Value::text(&node.text)]);
            fb.push(ID_LEMMA, vec![id.clone(), Value::text(&node.lemma)]);
            fb.push(ID_POS, vec![id.clone(), Value::text(&node.pos)]);
            for label in &node.labels {
                fb.push(ID_LABEL, vec![id.clone(), Value::text(label)]);
            }
        }
        for edge in graph.edges() {
            fb.push(
                HEAD_REL,
                vec![
                    Value::Node(edge.daughter),
                    Value::Node(edge.head),
                    Value::text(&edge.relation),
                ],
            );
        }
        fb
    }

    /// Register an empty relation. Existing relations are kept.
    pub fn declare(&mut self, name: &str, arity: usize) {
        self.relations
            .entry(name.to_string())
            .or_insert_with(|| Relation::new(name, arity));
    }

    pub fn insert(&mut self, name: &str, tuple: Vec<Value>) -> Result<bool, QueryError> {
        self.relations
            .get_mut(name)
            .ok_or_else(|| QueryError::UnknownRelation(name.to_string()))?
            .insert(tuple)
    }

    /// Insert into a relation declared by this module with the right arity.
    fn push(&mut self, name: &str, tuple: Vec<Value>) {
        if let Err(e) = self.insert(name, tuple) {
            log::warn!("dropped fact: {}", e);
        }
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// Check every goal against the declared relations.
    pub fn validate(&self, query: &Query) -> Result<(), QueryError> {
        for goal in query.goals() {
            if let Goal::Member { relation, args } = goal {
                let rel = self
                    .relations
                    .get(relation)
                    .ok_or_else(|| QueryError::UnknownRelation(relation.clone()))?;
                if rel.arity() != args.len() {
                    return Err(QueryError::ArityMismatch {
                        relation: relation.clone(),
                        expected: rel.arity(),
                        found: args.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Up to [`DEFAULT_SOLUTION_CAP`] solutions.
    pub fn solve<'a>(&'a self, query: &'a Query) -> Result<Solutions<'a>, QueryError> {
        self.solve_with_cap(query, DEFAULT_SOLUTION_CAP)
    }

    pub fn solve_with_cap<'a>(&'a self, query: &'a Query, cap: usize) -> Result<Solutions<'a>, QueryError> {
        self.validate(query)?;
        Ok(Solutions::new(self, query, cap))
    }

    /// First solution within the default cap, if any.
    pub fn first(&self, query: &Query) -> Result<Option<Solution>, QueryError> {
        Ok(self.solve(query)?.next())
    }
}
