//! FIFO Policy Module

use std::collections::VecDeque;

use crate::cache::{CacheKey, CacheTable};
use crate::eviction::EvictionPolicy;

// == FIFO Policy ==
/// Evicts keys in the order they were inserted, ignoring reads.
///
/// Overwriting a tracked key re-queues it at the back.
#[derive(Debug)]
pub struct FifoPolicy<K> {
    queue: VecDeque<K>,
}

impl<K: CacheKey> FifoPolicy<K> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Returns the next key to be evicted without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.queue.front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<K: CacheKey> Default for FifoPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey, V> EvictionPolicy<K, V> for FifoPolicy<K> {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn record_insertion(&mut self, key: &K) {
        self.queue.retain(|k| k != key);
        self.queue.push_back(key.clone());
    }

    fn record_access(&mut self, _key: &K) {}

    fn select_victim(&mut self, _table: &CacheTable<K, V>, _now_ms: u64) -> Option<K> {
        self.queue.pop_front()
    }

    fn forget(&mut self, key: &K) {
        self.queue.retain(|k| k != key);
    }

    fn reset(&mut self) {
        self.queue.clear();
    }
}
