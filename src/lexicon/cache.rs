//! Process-wide lexicon cache.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use super::{LexiconError, PatternLibrary};
use crate::config::LexiconSource;

type Cache = RwLock<HashMap<LexiconSource, Arc<PatternLibrary>>>;

static LIBRARIES: OnceLock<Cache> = OnceLock::new();

/// The library for `source`, loading it on first use.
///
/// Entries are never replaced, so every caller sees the same `Arc`.
pub fn shared(source: &LexiconSource) -> Result<Arc<PatternLibrary>, LexiconError> {
    let cache = LIBRARIES.get_or_init(Cache::default);
    if let Some(library) = cache.read().get(source) {
        return Ok(Arc::clone(library));
    }

    // Load outside the lock; a racing loader's result is discarded.
    let loaded = Arc::new(PatternLibrary::load(source)?);
    let mut libraries = cache.write();
    Ok(Arc::clone(libraries.entry(source.clone()).or_insert(loaded)))
}
