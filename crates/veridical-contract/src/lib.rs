//! `veridical-contract`: Interface types for the veridical engine.
//!
//! This crate contains the pure data types exchanged with the outside world:
//! what the dependency parser hands in, and what the engine hands back. It
//! has no I/O, no graph and no solver.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! veridical-contract = { path = "crates/veridical-contract" }
//! ```
//!
//! ## What's included
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | `NodeId` with the `ROOT` sentinel |
//! | [`token`] | `ParsedToken`, `ParsedSentence`, `OrientationRequest` (parser wire format) |
//! | [`category`] | `Category` (lexicon categories) and `OrientationClass` |
//! | [`orientation`] | `Orientation`: positive, negative or neutral |
//! | [`transform`] | `Transformation`: one discovered rewrite opportunity |

pub mod node;
pub mod token;

pub mod category;
pub mod orientation;
pub mod transform;

// === Convenience re-exports ===
pub use category::{Category, OrientationClass};
pub use node::NodeId;
pub use orientation::Orientation;
pub use token::{OrientationRequest, ParsedSentence, ParsedToken};
pub use transform::Transformation;

/// Label attached to the node that carries the target proposition.
pub const PROPOSITION_LABEL: &str = "proposition";

/// Errors raised when decoding contract values from their string forms.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("Unknown veridicality category: {0}")]
    UnknownCategory(String),

    #[error("Unknown orientation: {0}")]
    UnknownOrientation(String),
}
