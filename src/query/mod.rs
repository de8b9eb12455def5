//! Query layer - relational goals over sentence facts
//!
//! Provides a small logic-query engine:
//! - Facts derived from a [`SentenceGraph`](crate::graph::SentenceGraph)
//! - Conjunctive queries built from membership, choice and inequality goals
//! - A capped depth-first solver yielding bindings in a stable order

mod facts;
mod goal;
mod relation;
mod solver;

pub use facts::{FactBase, HEAD_REL, ID_LABEL, ID_LEMMA, ID_POS, ID_TEXT};
pub use goal::{Goal, Query, QueryBuilder, Term, Var};
pub use relation::{Relation, Value};
pub use solver::{Solution, Solutions, DEFAULT_SOLUTION_CAP};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown relation: {0}")]
    UnknownRelation(String),
    #[error("Arity mismatch on {relation}: expected {expected}, found {found}")]
    ArityMismatch {
        relation: String,
        expected: usize,
        found: usize,
    },
}
