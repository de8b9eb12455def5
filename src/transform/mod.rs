//! Transformation catalog - structural rewrite rules
//!
//! Each rule is a fixed relational query over a sentence's facts that ties
//! the proposition node to a labeled veridicality trigger. The catalog
//! tries them in priority order and reports the first hit as a
//! [`Transformation`](veridical_contract::Transformation).

mod catalog;
mod rule;

pub use catalog::TransformationCatalog;
pub use rule::{CategorySource, Rule, RuleKind};
