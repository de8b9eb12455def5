//! Lexicon - veridicality trigger phrases by category
//!
//! A [`PatternLibrary`] is loaded once and then only read. Patterns are kept
//! longest-first so multi-word triggers claim their tokens before any of
//! their single-word parts can.

mod bundled;
mod cache;
mod loader;

pub use cache::shared;

use std::collections::BTreeSet;
use std::path::PathBuf;

use veridical_contract::Category;

use crate::config::LexiconSource;
use crate::graph::{ScanPolicy, SentenceGraph};

#[derive(thiserror::Error, Debug)]
pub enum LexiconError {
    #[error("Lexicon directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unknown lexicon category: {name}")]
    UnknownCategory { name: String },
}

/// One trigger phrase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    pub category: Category,
    /// Lowercased whitespace tokens.
    pub tokens: Vec<String>,
}

impl Pattern {
    /// Lowercases and tokenizes `phrase`. `None` for a blank phrase.
    pub fn new(category: Category, phrase: &str) -> Option<Self> {
        let tokens: Vec<String> = phrase.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return None;
        }
        Some(Self { category, tokens })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Label attached to matched nodes.
    pub fn label(&self) -> &'static str {
        self.category.as_str()
    }

    fn sort_key(&self) -> (std::cmp::Reverse<usize>, &[String], &'static str) {
        (std::cmp::Reverse(self.tokens.len()), self.tokens.as_slice(), self.category.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    /// Sorts longest-first, ties by tokens then category name; exact duplicates drop.
    pub fn new(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        let mut patterns: Vec<Pattern> = patterns.into_iter().collect();
        patterns.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        patterns.dedup();
        Self { patterns }
    }

    /// The lexicon shipped with the crate.
    pub fn bundled() -> Self {
        bundled::library()
    }

    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self, LexiconError> {
        loader::load_dir(&dir.into())
    }

    pub fn load(source: &LexiconSource) -> Result<Self, LexiconError> {
        let library = match source {
            LexiconSource::Bundled => Self::bundled(),
            LexiconSource::Directory(dir) => Self::from_dir(dir.clone())?,
        };
        log::info!("loaded {} lexicon patterns from {}", library.len(), source);
        Ok(library)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn categories(&self) -> BTreeSet<Category> {
        self.patterns.iter().map(|p| p.category).collect()
    }

    /// Merge and label the first occurrence of every pattern, by surface
    /// text and then by lemma.
    pub fn prelabel(&self, graph: &SentenceGraph, policy: ScanPolicy) -> SentenceGraph {
        let mut graph = graph.clone();
        for pattern in &self.patterns {
            let before = graph.len();
            graph = graph.search_and_merge_with(pattern.tokens.as_slice(), pattern.label(), policy);
            graph = graph.search_and_merge_lemmas_with(pattern.tokens.as_slice(), pattern.label(), policy);
            if graph.len() != before {
                log::trace!("merged {:?} as {}", pattern.tokens.join(" "), pattern.label());
            }
        }
        graph
    }
}
