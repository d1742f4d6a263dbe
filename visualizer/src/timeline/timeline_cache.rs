//! Memoization of derived chart data keyed by data load and visible domain.
//!
//! Derivations are pure, so a cached value is valid for as long as neither the sample set
//! (tracked by a version counter) nor the domain changes.

use super::time_domain::Domain;
use std::collections::HashMap;

/// Zooming back and forth between a few domains stays cached; anything beyond is recomputed.
const MAX_CACHED_DOMAINS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub samples_version: u64,
    pub domain: Domain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStatistics {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Clone)]
pub struct TimelineCache<V> {
    entries: HashMap<CacheKey, V>,
    statistics: CacheStatistics,
}

impl<V> TimelineCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            statistics: CacheStatistics::default(),
        }
    }

    pub fn get_or_compute(&mut self, key: CacheKey, compute: impl FnOnce() -> V) -> &V {
        if self.entries.contains_key(&key) {
            self.statistics.hits += 1;
            log::trace!("timeline cache hit for {}", key.domain);
        } else {
            self.statistics.misses += 1;
            log::trace!("timeline cache miss for {}", key.domain);
            if self.entries.len() >= MAX_CACHED_DOMAINS {
                self.entries.clear();
            }
            self.entries.insert(key, compute());
        }
        &self.entries[&key]
    }

    /// Drops every entry computed from an older sample set.
    pub fn invalidate_samples(&mut self, current_version: u64) {
        self.entries.retain(|key, _| key.samples_version == current_version);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn statistics(&self) -> CacheStatistics {
        self.statistics
    }
}

impl<V> Default for TimelineCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
