//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with a pluggable eviction
//! policy and lazy TTL expiration.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheKey, CacheStats, CacheTable, Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::eviction::EvictionPolicy;

// == Cache Store ==
/// Cache storage with TTL support and optional capacity-bound eviction.
///
/// The store is not synchronized; wrap it in [`Cache`](crate::cache::Cache)
/// to share it between threads. Expired entries are only reclaimed when a
/// read finds them, when the eviction policy picks them, or on `clear`.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: CacheTable<K, V>,
    /// Victim selection, consulted only when `max_size` is exceeded
    policy: Option<Box<dyn EvictionPolicy<K, V>>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries, None = unbounded
    max_size: Option<usize>,
    /// TTL applied to entries set without an explicit TTL
    default_ttl: Option<Duration>,
    clock: Arc<dyn Clock>,
}

impl<K, V> CacheStore<K, V>
where
    K: CacheKey,
    V: Clone + 'static,
{
    // == Constructor ==
    /// Creates a new CacheStore reading time from the system clock.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL for entries set without one, None or zero = never expire
    /// * `max_size` - Entry count above which the policy evicts, None = unbounded
    /// * `policy` - Eviction policy, None = never evict
    pub fn new(
        default_ttl: Option<Duration>,
        max_size: Option<usize>,
        policy: Option<Box<dyn EvictionPolicy<K, V>>>,
    ) -> Self {
        Self::with_clock(default_ttl, max_size, policy, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore with a custom clock.
    pub fn with_clock(
        default_ttl: Option<Duration>,
        max_size: Option<usize>,
        policy: Option<Box<dyn EvictionPolicy<K, V>>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        // A zero default means entries never expire, not that they are born dead
        let default_ttl = default_ttl.filter(|ttl| !ttl.is_zero());

        info!(
            "Cache store initialized: default_ttl={:?}, max_size={:?}, eviction_policy={}",
            default_ttl,
            max_size,
            policy.as_ref().map_or("none", |p| p.name())
        );

        Self {
            entries: CacheTable::new(),
            policy,
            stats: CacheStats::new(),
            max_size,
            default_ttl,
            clock,
        }
    }

    /// Creates a new CacheStore from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::from_config_with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore from configuration with a custom clock.
    pub fn from_config_with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let policy = config.eviction.map(|kind| kind.build());
        Self::with_clock(config.default_ttl, config.max_size, policy, clock)
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// An existing entry for the key is replaced and its TTL restarts. The
    /// insertion is recorded with the policy for new keys and overwrites
    /// alike. If the store then holds more than `max_size` entries, at most
    /// one victim chosen by the policy is removed.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL (falls back to the default TTL if None)
    pub fn set(&mut self, key: K, value: V, ttl: Option<Duration>) -> Result<()> {
        check_key("set", &key)?;

        let now = self.clock.now_ms();
        let effective_ttl = ttl.or(self.default_ttl);

        let entry = CacheEntry::new(value, effective_ttl, now);
        self.entries.insert(key.clone(), entry);
        debug!("Set key: {:?} with ttl: {:?}", key, effective_ttl);

        if let Some(policy) = self.policy.as_mut() {
            policy.record_insertion(&key);
        }

        self.enforce_capacity(now);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `Ok(None)` on a miss. An expired entry is removed and reported
    /// as a miss; only valid hits are recorded with the policy.
    pub fn get(&mut self, key: &K) -> Result<Option<V>> {
        check_key("get", key)?;

        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                if let Some(policy) = self.policy.as_mut() {
                    policy.record_access(key);
                }
                debug!("Cache hit for key: {:?}", key);
                Ok(Some(value))
            }
            Some(_) => {
                self.remove_entry(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                info!("Cache expired for key: {:?}", key);
                Ok(None)
            }
            None => {
                self.stats.record_miss();
                debug!("Cache miss for key: {:?}", key);
                Ok(None)
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns whether an entry was removed. Deleting an absent key is a
    /// no-op.
    pub fn delete(&mut self, key: &K) -> Result<bool> {
        check_key("delete", key)?;

        let removed = self.remove_entry(key).is_some();
        if removed {
            debug!("Deleted key: {:?} from cache", key);
        } else {
            info!("Attempted to delete non-existent key: {:?}", key);
        }

        Ok(removed)
    }

    // == Clear ==
    /// Removes every entry and resets the eviction policy.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        if let Some(policy) = self.policy.as_mut() {
            policy.reset();
        }
        self.stats.set_total_entries(0);
        info!("Cache cleared, removed {} entries", removed);
    }

    /// Checks whether an entry exists, without checking expiry or touching
    /// the policy.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    /// Returns the configured policy's name, if any.
    pub fn policy_name(&self) -> Option<&'static str> {
        self.policy.as_ref().map(|p| p.name())
    }

    // == Remove Entry ==
    /// Shared removal path for delete, expiry and eviction.
    ///
    /// The policy forgets the key whether or not the table holds it.
    fn remove_entry(&mut self, key: &K) -> Option<CacheEntry<V>> {
        if let Some(policy) = self.policy.as_mut() {
            policy.forget(key);
        }
        let removed = self.entries.remove(key);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Enforce Capacity ==
    /// Evicts at most one entry if the store is above `max_size`.
    fn enforce_capacity(&mut self, now_ms: u64) {
        let Some(max_size) = self.max_size else {
            return;
        };
        if self.entries.len() <= max_size {
            return;
        }

        let Some(policy) = self.policy.as_mut() else {
            debug!(
                "Cache size {} exceeds max_size {} but no eviction policy is configured",
                self.entries.len(),
                max_size
            );
            return;
        };

        let policy_name = policy.name();
        match policy.select_victim(&self.entries, now_ms) {
            Some(victim) => {
                if self.remove_entry(&victim).is_some() {
                    self.stats.record_eviction();
                    info!(
                        "Evicted key: {:?} due to cache size limit ({} policy)",
                        victim, policy_name
                    );
                } else {
                    debug!("Eviction victim {:?} was no longer cached", victim);
                }
            }
            None => {
                warn!(
                    "Cache size {} exceeds max_size {} but {} policy offered no victim",
                    self.entries.len(),
                    max_size,
                    policy_name
                );
            }
        }
    }
}

fn check_key<K: CacheKey>(op: &str, key: &K) -> Result<()> {
    key.validate().map_err(|err| {
        warn!("Invalid key provided to {}(): {:?}. Error: {}", op, key, err);
        err
    })
}
