//! Ordered rule catalog.

use veridical_contract::Transformation;

use super::rule::{Rule, RuleKind};
use crate::graph::SentenceGraph;
use crate::query::{FactBase, QueryError, DEFAULT_SOLUTION_CAP};

#[derive(Clone, Debug)]
pub struct TransformationCatalog {
    rules: Vec<Rule>,
    solution_cap: usize,
}

impl Default for TransformationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TransformationCatalog {
    /// All fourteen rules in priority order.
    pub fn standard() -> Self {
        Self {
            rules: RuleKind::PRIORITY.iter().map(|kind| kind.rule()).collect(),
            solution_cap: DEFAULT_SOLUTION_CAP,
        }
    }

    /// Cap on solutions pulled from each rule query. Zero is treated as one.
    pub fn with_solution_cap(mut self, cap: usize) -> Self {
        self.solution_cap = cap.max(1);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn solution_cap(&self) -> usize {
        self.solution_cap
    }

    /// First solution of the first rule that matches, if any.
    pub fn find_a_transformation(&self, facts: &FactBase) -> Result<Option<Transformation>, QueryError> {
        for rule in &self.rules {
            match rule.first_match(facts, self.solution_cap)? {
                Some(found) => {
                    log::debug!(
                        "{} matched {:?} as {}",
                        found.name,
                        found.raw_ids(),
                        found.category
                    );
                    return Ok(Some(found));
                }
                None => log::trace!("{}: no match for {}", rule.name(), rule.query()),
            }
        }
        Ok(None)
    }

    /// [`find_a_transformation`](Self::find_a_transformation) over fresh facts
    /// for `graph`.
    pub fn find_in_graph(&self, graph: &SentenceGraph) -> Result<Option<Transformation>, QueryError> {
        self.find_a_transformation(&FactBase::from_graph(graph))
    }
}
