//! cachex - An in-process key-value cache
//!
//! Provides TTL expiration with lazy reclamation and pluggable eviction
//! policies (LRU, LFU, FIFO and expiry-based) behind a capacity bound.

pub mod cache;
pub mod config;
pub mod error;
pub mod eviction;

pub use cache::{
    Cache, CacheEntry, CacheKey, CacheStats, CacheStore, CacheTable, Clock, FloatKey, MockClock,
    SystemClock,
};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use eviction::{EvictionKind, EvictionPolicy, FifoPolicy, LfuPolicy, LruPolicy, TtlPolicy};
