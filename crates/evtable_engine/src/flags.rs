//! Filter-flag extraction.

use std::collections::HashMap;

use evtable_foundation::{FilterFlag, PathDecision};
use evtable_storage::FilterDecisions;
use tracing::trace;

/// Maps filter-result names onto the fixed [`FilterFlag`] set.
///
/// The name lookup is built once and reused for every event.
#[derive(Clone, Debug)]
pub struct FlagExtractor {
    by_name: HashMap<&'static str, FilterFlag>,
}

impl Default for FlagExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagExtractor {
    /// Builds the name lookup.
    #[must_use]
    pub fn new() -> Self {
        let by_name = FilterFlag::ALL
            .iter()
            .map(|&flag| (flag.source_name(), flag))
            .collect();
        Self { by_name }
    }

    /// Looks up the flag for a filter-result name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<FilterFlag> {
        self.by_name.get(name).copied()
    }

    /// Projects the filter results onto the fixed flag set.
    ///
    /// Flags missing from `results` pass; unknown names are skipped; for a
    /// repeated name the last entry wins.
    #[must_use]
    pub fn extract(&self, results: &[PathDecision]) -> FilterDecisions {
        let mut decisions = FilterDecisions::default();
        for result in results {
            match self.lookup(&result.name) {
                Some(flag) => decisions.set(flag, result.accept),
                None => trace!(name = %result.name, "ignoring unrecognized filter"),
            }
        }
        decisions
    }
}
