//! LFU Policy Module
//!
//! Implements Least Frequently Used tracking for cache eviction.

use std::collections::HashMap;

use crate::cache::{CacheKey, CacheTable};
use crate::eviction::EvictionPolicy;

#[derive(Debug, Clone, Copy)]
struct Frequency {
    count: u64,
    /// Insertion sequence, breaks ties between equal counts
    seq: u64,
}

// == LFU Policy ==
/// Evicts the key with the fewest recorded accesses.
///
/// Insertion resets a key's count to 1 and each valid read increments it.
/// Among keys sharing the minimum count, the one inserted earliest goes first.
/// Selecting a victim scans every tracked key.
#[derive(Debug)]
pub struct LfuPolicy<K> {
    counts: HashMap<K, Frequency>,
    next_seq: u64,
}

impl<K: CacheKey> LfuPolicy<K> {
    // == Constructor ==
    /// Creates a new empty LFU policy.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Returns the access count recorded for `key`.
    pub fn count(&self, key: &K) -> Option<u64> {
        self.counts.get(key).map(|f| f.count)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn track(&mut self, key: &K) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.counts.insert(key.clone(), Frequency { count: 1, seq });
    }
}

impl<K: CacheKey> Default for LfuPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey, V> EvictionPolicy<K, V> for LfuPolicy<K> {
    fn name(&self) -> &'static str {
        "lfu"
    }

    fn record_insertion(&mut self, key: &K) {
        self.track(key);
    }

    fn record_access(&mut self, key: &K) {
        match self.counts.get_mut(key) {
            Some(freq) => freq.count = freq.count.saturating_add(1),
            None => self.track(key),
        }
    }

    fn select_victim(&mut self, _table: &CacheTable<K, V>, _now_ms: u64) -> Option<K> {
        let victim = self
            .counts
            .iter()
            .min_by_key(|(_, freq)| (freq.count, freq.seq))
            .map(|(key, _)| key.clone())?;

        self.counts.remove(&victim);
        Some(victim)
    }

    fn forget(&mut self, key: &K) {
        self.counts.remove(key);
    }

    fn reset(&mut self) {
        self.counts.clear();
        self.next_seq = 0;
    }
}
