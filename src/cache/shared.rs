//! Shared Cache Handle
//!
//! Thread-safe entry point composing a [`CacheStore`] with its policy.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::{CacheKey, CacheStats, CacheStore, Clock};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::eviction::EvictionPolicy;

// == Cache ==
/// Cloneable, thread-safe cache handle.
///
/// Every operation, including a read that removes an expired entry, runs
/// under one mutex covering the table and the eviction policy, so a table
/// change and its policy notification are never observed apart.
///
/// # Example
/// ```
/// use std::time::Duration;
///
/// use cachex::{Cache, CacheConfig, EvictionKind};
///
/// let cache: Cache<String, u32> = Cache::new(
///     &CacheConfig::default()
///         .with_max_size(2)
///         .with_eviction(EvictionKind::Lru),
/// );
///
/// cache.set("a".to_string(), 1, None).unwrap();
/// cache.set("b".to_string(), 2, Some(Duration::from_secs(30))).unwrap();
/// assert_eq!(cache.get(&"a".to_string()).unwrap(), Some(1));
///
/// cache.set("c".to_string(), 3, None).unwrap();
/// assert_eq!(cache.get(&"b".to_string()).unwrap(), None);
/// ```
pub struct Cache<K, V> {
    inner: Arc<Mutex<CacheStore<K, V>>>,
}

impl<K, V> Cache<K, V>
where
    K: CacheKey,
    V: Clone + 'static,
{
    /// Creates a cache from configuration, using the system clock.
    pub fn new(config: &CacheConfig) -> Self {
        Self::from_store(CacheStore::from_config(config))
    }

    /// Creates a cache from configuration with a custom clock.
    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self::from_store(CacheStore::from_config_with_clock(config, clock))
    }

    /// Creates a cache around a caller-supplied eviction policy.
    pub fn with_policy(
        default_ttl: Option<Duration>,
        max_size: Option<usize>,
        policy: Box<dyn EvictionPolicy<K, V>>,
    ) -> Self {
        Self::from_store(CacheStore::new(default_ttl, max_size, Some(policy)))
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`CacheStore::get`].
    pub fn get(&self, key: &K) -> Result<Option<V>> {
        self.inner.lock().get(key)
    }

    /// See [`CacheStore::set`].
    pub fn set(&self, key: K, value: V, ttl: Option<Duration>) -> Result<()> {
        self.inner.lock().set(key, value, ttl)
    }

    /// See [`CacheStore::delete`].
    pub fn delete(&self, key: &K) -> Result<bool> {
        self.inner.lock().delete(key)
    }

    /// See [`CacheStore::clear`].
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> fmt::Debug for Cache<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache").field("inner", &self.inner).finish()
    }
}
