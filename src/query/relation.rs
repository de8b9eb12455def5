//! Relations: named sets of fixed-arity tuples with per-column indices.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use veridical_contract::NodeId;

use super::QueryError;

/// A ground value stored in a relation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Node(NodeId),
    Text(Arc<str>),
}

impl Value {
    pub fn text(s: &str) -> Self {
        Value::Text(Arc::from(s))
    }

    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Value::Node(id) => Some(*id),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_ref()),
            Value::Node(_) => None,
        }
    }
}

impl From<NodeId> for Value {
    fn from(id: NodeId) -> Self {
        Value::Node(id)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(Arc::from(s))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Node(id) => write!(f, "{}", id),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Tuples are kept in insertion order; duplicates are ignored.
#[derive(Clone, Debug)]
pub struct Relation {
    name: String,
    arity: usize,
    tuples: Vec<Vec<Value>>,
    seen: HashSet<Vec<Value>>,
    /// column → value → tuple positions
    columns: Vec<HashMap<Value, Vec<usize>>>,
}

impl Relation {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            tuples: Vec::new(),
            seen: HashSet::new(),
            columns: vec![HashMap::new(); arity],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Returns `false` when the tuple was already present.
    pub fn insert(&mut self, tuple: Vec<Value>) -> Result<bool, QueryError> {
        if tuple.len() != self.arity {
            return Err(QueryError::ArityMismatch {
                relation: self.name.clone(),
                expected: self.arity,
                found: tuple.len(),
            });
        }
        if !self.seen.insert(tuple.clone()) {
            return Ok(false);
        }
        let pos = self.tuples.len();
        for (column, value) in self.columns.iter_mut().zip(&tuple) {
            column.entry(value.clone()).or_default().push(pos);
        }
        self.tuples.push(tuple);
        Ok(true)
    }

    pub fn get(&self, pos: usize) -> Option<&[Value]> {
        self.tuples.get(pos).map(Vec::as_slice)
    }

    pub fn contains(&self, tuple: &[Value]) -> bool {
        self.seen.contains(tuple)
    }

    /// Positions of tuples that may match `pattern`, in insertion order.
    ///
    /// Uses the most selective bound column; the caller still has to unify
    /// the remaining columns.
    pub fn candidates(&self, pattern: &[Option<Value>]) -> Vec<usize> {
        let mut best: Option<&[usize]> = None;
        for (column, bound) in self.columns.iter().zip(pattern) {
            let Some(value) = bound else { continue };
            let postings = column.get(value).map(Vec::as_slice).unwrap_or(&[]);
            if best.map_or(true, |b| postings.len() < b.len()) {
                best = Some(postings);
            }
        }
        match best {
            Some(postings) => postings.to_vec(),
            None => (0..self.tuples.len()).collect(),
        }
    }
}
