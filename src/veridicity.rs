//! Veridicity pipeline
//!
//! ```text
//! parse ─▶ graph ─▶ merge proposition ─▶ prelabel lexicon ─┐
//!                                                          ▼
//!            ┌──── merge (P, trigger, ...) ◀── find rule ◀─┤
//!            └──────────────▶ update orientation ──────────┘
//! ```
//!
//! Every applied rule folds at least two nodes into the proposition, so the
//! loop ends after fewer iterations than the sentence has tokens. Lexicon
//! labels are reapplied after each merge.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use veridical_contract::{Orientation, OrientationRequest, ParsedSentence, Transformation, PROPOSITION_LABEL};

use crate::config::EngineConfig;
use crate::graph::SentenceGraph;
use crate::lexicon::{self, PatternLibrary};
use crate::orientation::OrientationState;
use crate::transform::TransformationCatalog;
use crate::Result;

/// One applied transformation and its effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub transformation: Transformation,
    pub before: OrientationState,
    pub after: OrientationState,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VeridicityReport {
    pub orientation: Orientation,
    pub frozen: bool,
    /// False when the proposition tokens never matched the sentence.
    pub proposition_found: bool,
    pub steps: Vec<Step>,
}

impl VeridicityReport {
    pub fn state(&self) -> OrientationState {
        OrientationState::new(self.orientation, self.frozen)
    }

    /// Names of the applied rules, in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.steps
            .iter()
            .map(|s| s.transformation.name.as_str())
            .collect()
    }
}

/// Orientation engine: a lexicon, the rule catalog and the settings that
/// drive the loop. Cheap to clone and safe to share.
#[derive(Clone, Debug)]
pub struct Veridicity {
    library: Arc<PatternLibrary>,
    catalog: TransformationCatalog,
    config: EngineConfig,
}

impl Veridicity {
    /// Engine over the configured lexicon, loaded through the shared cache.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let library = lexicon::shared(&config.lexicon)?;
        Ok(Self::with_library(library, config))
    }

    pub fn with_library(library: Arc<PatternLibrary>, config: EngineConfig) -> Self {
        let catalog = TransformationCatalog::standard().with_solution_cap(config.solution_cap);
        Self {
            library,
            catalog,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn catalog(&self) -> &TransformationCatalog {
        &self.catalog
    }

    /// Build the graph, merge the proposition and apply lexicon labels.
    pub fn prepare<S: AsRef<str>>(&self, sentence: &ParsedSentence, proposition: &[S]) -> Result<SentenceGraph> {
        let policy = self.config.scan_policy;
        let tokens: Vec<String> = proposition.iter().map(|t| t.as_ref().to_lowercase()).collect();
        let graph = SentenceGraph::from_parse(sentence)?
            .search_and_merge_with(tokens.as_slice(), PROPOSITION_LABEL, policy);
        Ok(self.library.prelabel(&graph, policy))
    }

    /// Run the rewrite loop and record every step.
    pub fn analyze<S: AsRef<str>>(&self, sentence: &ParsedSentence, proposition: &[S]) -> Result<VeridicityReport> {
        let mut graph = self.prepare(sentence, proposition)?;

        if graph.nodes_with_label(PROPOSITION_LABEL).next().is_none() {
            log::warn!(
                "proposition {:?} not found in {:?}",
                proposition.iter().map(|t| t.as_ref()).collect::<Vec<&str>>().join(" "),
                sentence.text()
            );
            return Ok(VeridicityReport::default());
        }

        let mut state = OrientationState::default();
        let mut steps = Vec::new();
        while let Some(transformation) = self.catalog.find_in_graph(&graph)? {
            let before = state;
            state = state.apply(transformation.category);
            log::debug!(
                "{} ({}): {} -> {}",
                transformation.name,
                transformation.category,
                before,
                state
            );

            let size = graph.len();
            let merged = graph.merge_and_label_node_ids(&transformation.node_ids, PROPOSITION_LABEL)?;
            if let Some(target) = transformation.target() {
                log::trace!("merged into {}: {:?}", target, merged.node(target).map(|n| n.text.as_str()));
            }
            steps.push(Step {
                transformation,
                before,
                after: state,
            });
            if merged.len() >= size {
                log::warn!("merge did not shrink the graph; stopping");
                break;
            }
            // a trigger whose first occurrence was folded away can now match later on
            graph = self.library.prelabel(&merged, self.config.scan_policy);
        }

        Ok(VeridicityReport {
            orientation: state.orientation,
            frozen: state.frozen,
            proposition_found: true,
            steps,
        })
    }

    pub fn analyze_request(&self, request: &OrientationRequest) -> Result<VeridicityReport> {
        self.analyze(&request.sentence, request.proposition.as_slice())
    }

    pub fn get_orientation<S: AsRef<str>>(&self, sentence: &ParsedSentence, proposition: &[S]) -> Result<Orientation> {
        Ok(self.analyze(sentence, proposition)?.orientation)
    }
}

/// Orientation of `proposition` in `sentence` with the bundled lexicon and
/// default settings.
pub fn get_orientation<S: AsRef<str>>(sentence: &ParsedSentence, proposition: &[S]) -> Result<Orientation> {
    Veridicity::new(EngineConfig::default())?.get_orientation(sentence, proposition)
}
