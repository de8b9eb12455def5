//! # veridical
//!
//! Veridicality orientation of embedded propositions: given a dependency
//! parse and the tokens of a proposition inside it, decide whether the
//! sentence commits the reader to that proposition being true (positive),
//! false (negative), or neither (neutral).
//!
//! ## Quick Start
//! ```rust,ignore
//! use veridical::{get_orientation, Orientation, ParsedSentence};
//!
//! let sentence: ParsedSentence = serde_json::from_str(&parser_output)?;
//! let orientation = get_orientation(&sentence, &["the", "sun", "is", "yellow"])?;
//! assert_eq!(orientation, Orientation::Negative);
//! ```
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          VERIDICAL                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │   graph       → SentenceGraph: arena of tokens + dependency set │
//! │   lexicon     → PatternLibrary: trigger phrases by category     │
//! │   query       → FactBase + depth-first relational solver        │
//! │   transform   → 14 prioritized rewrite rules                    │
//! │   orientation → (orientation, frozen) combinator                │
//! │   veridicity  → fixed-point loop tying the above together       │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![allow(
    clippy::new_without_default,
    clippy::len_without_is_empty,
    clippy::type_complexity,
    clippy::unnecessary_map_or,
    clippy::doc_lazy_continuation
)]

// === Core modules ===
pub mod config;
pub mod graph;
pub mod lexicon;
pub mod orientation;
pub mod query;
pub mod transform;
pub mod veridicity;

// === Re-exports for convenience ===

// Wire types
pub use veridical_contract::{
    Category, NodeId, Orientation, OrientationClass, OrientationRequest, ParsedSentence,
    ParsedToken, Transformation, PROPOSITION_LABEL,
};

// Graph
pub use crate::graph::{ScanPolicy, SentenceGraph};

// Lexicon
pub use crate::lexicon::{Pattern, PatternLibrary};

// Configuration
pub use crate::config::{EngineConfig, LexiconSource};

// Rules and combinator
pub use crate::orientation::OrientationState;
pub use crate::transform::{RuleKind, TransformationCatalog};

// Pipeline
pub use crate::veridicity::{get_orientation, Step, Veridicity, VeridicityReport};

// === Error types ===

/// Crate-level error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] lexicon::LexiconError),

    #[error("Graph error: {0}")]
    Graph(#[from] graph::GraphError),

    #[error("Query error: {0}")]
    Query(#[from] query::QueryError),

    #[error("Invalid parse: {0}")]
    InvalidParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

// === Constants ===

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
