//! TTL Policy Module
//!
//! Stateless policy that evicts entries whose expiry has already passed.

use std::marker::PhantomData;

use crate::cache::{CacheKey, CacheTable};
use crate::eviction::EvictionPolicy;

// == TTL Policy ==
/// Evicts the first expired entry found in the table.
///
/// Keeps no bookkeeping; expiry is read straight from the entries. When no
/// entry has expired there is no victim and the cache may stay above its
/// bound until one does.
#[derive(Debug)]
pub struct TtlPolicy<K> {
    _key: PhantomData<fn() -> K>,
}

impl<K> TtlPolicy<K> {
    pub fn new() -> Self {
        Self { _key: PhantomData }
    }
}

impl<K> Default for TtlPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey, V> EvictionPolicy<K, V> for TtlPolicy<K> {
    fn name(&self) -> &'static str {
        "ttl"
    }

    fn record_insertion(&mut self, _key: &K) {}

    fn record_access(&mut self, _key: &K) {}

    fn select_victim(&mut self, table: &CacheTable<K, V>, now_ms: u64) -> Option<K> {
        table
            .iter()
            .find(|(_, entry)| entry.is_expired_at(now_ms))
            .map(|(key, _)| key.clone())
    }

    fn forget(&mut self, _key: &K) {}

    fn reset(&mut self) {}
}
