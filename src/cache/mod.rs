//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and pluggable eviction.

mod clock;
mod entry;
mod key;
mod shared;
mod stats;
mod store;


use std::collections::HashMap;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, MockClock, SystemClock};
pub use entry::CacheEntry;
pub use key::{CacheKey, FloatKey};
pub use shared::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;

/// The key to entry mapping owned by a [`CacheStore`].
pub type CacheTable<K, V> = HashMap<K, CacheEntry<V>>;
