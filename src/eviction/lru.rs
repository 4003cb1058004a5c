//! LRU Policy Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::VecDeque;

use crate::cache::{CacheKey, CacheTable};
use crate::eviction::EvictionPolicy;

// == LRU Policy ==
/// Evicts the key that was touched least recently.
///
/// Keys are stored in a VecDeque where:
/// - Front = Least recently used
/// - Back = Most recently used
///
/// Touching a key is O(n); eviction is O(1).
#[derive(Debug)]
pub struct LruPolicy<K> {
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K: CacheKey> LruPolicy<K> {
    // == Constructor ==
    /// Creates a new empty LRU policy.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to back).
    fn touch(&mut self, key: &K) {
        self.remove(key);
        self.order.push_back(key.clone());
    }

    fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front()
    }

    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

impl<K: CacheKey> Default for LruPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey, V> EvictionPolicy<K, V> for LruPolicy<K> {
    fn name(&self) -> &'static str {
        "lru"
    }

    fn record_insertion(&mut self, key: &K) {
        self.touch(key);
    }

    fn record_access(&mut self, key: &K) {
        self.touch(key);
    }

    fn select_victim(&mut self, _table: &CacheTable<K, V>, _now_ms: u64) -> Option<K> {
        self.order.pop_front()
    }

    fn forget(&mut self, key: &K) {
        self.remove(key);
    }

    fn reset(&mut self) {
        self.order.clear();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    type Policy = LruPolicy<&'static str>;

    fn victim(lru: &mut Policy) -> Option<&'static str> {
        EvictionPolicy::<&'static str, ()>::select_victim(lru, &CacheTable::new(), 0)
    }

    fn insert(lru: &mut Policy, key: &'static str) {
        EvictionPolicy::<&'static str, ()>::record_insertion(lru, &key);
    }

    fn access(lru: &mut Policy, key: &'static str) {
        EvictionPolicy::<&'static str, ()>::record_access(lru, &key);
    }

    #[test]
    fn test_lru_new() {
        let lru = Policy::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
    }

    #[test]
    fn test_lru_insertion_order() {
        let mut lru = Policy::new();

        insert(&mut lru, "key1");
        insert(&mut lru, "key2");
        insert(&mut lru, "key3");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some(&"key1"));
    }

    #[test]
    fn test_lru_access_moves_to_back() {
        let mut lru = Policy::new();

        insert(&mut lru, "a");
        insert(&mut lru, "b");
        insert(&mut lru, "c");

        access(&mut lru, "a");

        assert_eq!(victim(&mut lru), Some("b"));
        assert_eq!(victim(&mut lru), Some("c"));
        assert_eq!(victim(&mut lru), Some("a"));
        assert_eq!(victim(&mut lru), None);
    }

    #[test]
    fn test_lru_reinsert_counts_as_touch() {
        let mut lru = Policy::new();

        insert(&mut lru, "a");
        insert(&mut lru, "b");
        insert(&mut lru, "a");

        assert_eq!(lru.len(), 2);
        assert_eq!(lru.peek_oldest(), Some(&"b"));
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = Policy::new();

        insert(&mut lru, "a");
        insert(&mut lru, "b");
        insert(&mut lru, "c");

        // front=[a, b, c]=back, then [b, c, a], [b, a, c], [a, c, b]
        access(&mut lru, "a");
        access(&mut lru, "c");
        access(&mut lru, "b");

        assert_eq!(victim(&mut lru), Some("a"));
        assert_eq!(victim(&mut lru), Some("c"));
        assert_eq!(victim(&mut lru), Some("b"));
    }

    #[test]
    fn test_lru_access_untracked_key_starts_tracking() {
        let mut lru = Policy::new();

        access(&mut lru, "ghost");
        assert!(lru.contains(&"ghost"));
    }

    #[test]
    fn test_lru_forget() {
        let mut lru = Policy::new();

        insert(&mut lru, "key1");
        insert(&mut lru, "key2");
        insert(&mut lru, "key3");

        EvictionPolicy::<&'static str, ()>::forget(&mut lru, &"key2");
        EvictionPolicy::<&'static str, ()>::forget(&mut lru, &"nonexistent");

        assert_eq!(lru.len(), 2);
        assert!(!lru.contains(&"key2"));
        assert!(lru.contains(&"key1"));
        assert!(lru.contains(&"key3"));
    }

    #[test]
    fn test_lru_reset() {
        let mut lru = Policy::new();

        insert(&mut lru, "key1");
        insert(&mut lru, "key2");
        EvictionPolicy::<&'static str, ()>::reset(&mut lru);

        assert!(lru.is_empty());
        assert_eq!(victim(&mut lru), None);
    }
}
