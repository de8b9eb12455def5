//! Engine configuration.
//!
//! Defaults, JSON files, or `VERIDICAL_*` environment variables.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::ScanPolicy;
use crate::query::DEFAULT_SOLUTION_CAP;
use crate::{Error, Result};

/// Directory holding one file per lexicon category.
pub const ENV_LEXICON_DIR: &str = "VERIDICAL_LEXICON_DIR";
/// Maximum solutions pulled per rule query.
pub const ENV_SOLUTION_CAP: &str = "VERIDICAL_SOLUTION_CAP";
/// `skip_overrun` or `abort_on_overrun`.
pub const ENV_SCAN_POLICY: &str = "VERIDICAL_SCAN_POLICY";

/// Where the pattern library comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconSource {
    /// The lexicon compiled into the crate.
    #[default]
    Bundled,
    /// A directory on disk, read at load time.
    Directory(PathBuf),
}

impl fmt::Display for LexiconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconSource::Bundled => f.write_str("bundled"),
            LexiconSource::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for ScanPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "skip_overrun" => Ok(ScanPolicy::SkipOverrun),
            "abort_on_overrun" => Ok(ScanPolicy::AbortOnOverrun),
            other => Err(Error::Config(format!("unknown scan policy: {}", other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub lexicon: LexiconSource,
    pub solution_cap: usize,
    pub scan_policy: ScanPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lexicon: LexiconSource::Bundled,
            solution_cap: DEFAULT_SOLUTION_CAP,
            scan_policy: ScanPolicy::SkipOverrun,
        }
    }
}

impl EngineConfig {
    /// Read `VERIDICAL_*` variables; anything unset or unparseable keeps its
    /// default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let lexicon = lookup(ENV_LEXICON_DIR)
            .filter(|dir| !dir.trim().is_empty())
            .map(|dir| LexiconSource::Directory(PathBuf::from(dir)))
            .unwrap_or(defaults.lexicon);

        let solution_cap = lookup(ENV_SOLUTION_CAP)
            .and_then(|raw| match raw.trim().parse() {
                Ok(cap) => Some(cap),
                Err(_) => {
                    log::warn!("ignoring {}={:?}: not a number", ENV_SOLUTION_CAP, raw);
                    None
                }
            })
            .unwrap_or(defaults.solution_cap);

        let scan_policy = lookup(ENV_SCAN_POLICY)
            .and_then(|raw| match raw.parse() {
                Ok(policy) => Some(policy),
                Err(e) => {
                    log::warn!("ignoring {}: {}", ENV_SCAN_POLICY, e);
                    None
                }
            })
            .unwrap_or(defaults.scan_policy);

        Self {
            lexicon,
            solution_cap,
            scan_policy,
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.solution_cap == 0 {
            return Err(Error::Config("solution_cap must be at least 1".into()));
        }
        Ok(())
    }

    pub fn with_lexicon(mut self, lexicon: LexiconSource) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_solution_cap(mut self, cap: usize) -> Self {
        self.solution_cap = cap;
        self
    }

    pub fn with_scan_policy(mut self, policy: ScanPolicy) -> Self {
        self.scan_policy = policy;
        self
    }
}
