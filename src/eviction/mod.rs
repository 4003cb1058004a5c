//! Eviction Module
//!
//! Pluggable policies that choose which entry to remove once a cache grows
//! past its capacity bound.
//!
//! Every policy implements [`EvictionPolicy`]. The store owning the policy
//! calls `record_insertion` once per `set`, `record_access` once per valid hit,
//! `forget` once per removal, and `reset` on `clear`, so each policy's
//! bookkeeping tracks the same keys as the table.

mod fifo;
mod lfu;
mod lru;
mod ttl;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cache::{CacheKey, CacheTable};

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use ttl::TtlPolicy;

// == Eviction Policy Trait ==
/// Decides which key to evict when the cache exceeds its capacity bound.
pub trait EvictionPolicy<K, V>: Send + fmt::Debug {
    /// Short policy name used in log events.
    fn name(&self) -> &'static str;

    /// Records that `key` was inserted or overwritten.
    fn record_insertion(&mut self, key: &K);

    /// Records a successful, non-expired read of `key`.
    fn record_access(&mut self, key: &K);

    /// Picks one key to evict, or `None` when nothing can be offered.
    ///
    /// The returned key is no longer tracked by the policy. Removing it from
    /// `table` is the caller's job.
    fn select_victim(&mut self, table: &CacheTable<K, V>, now_ms: u64) -> Option<K>;

    /// Stops tracking `key`. Untracked keys are ignored.
    fn forget(&mut self, key: &K);

    /// Drops all bookkeeping.
    fn reset(&mut self);
}

// == Eviction Kind ==
/// Names the built-in policies, for configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvictionKind {
    /// Least recently used
    Lru,
    /// Least frequently used
    Lfu,
    /// First in, first out
    Fifo,
    /// First expired entry
    Ttl,
}

impl EvictionKind {
    /// Builds a fresh, empty policy of this kind.
    pub fn build<K, V>(self) -> Box<dyn EvictionPolicy<K, V>>
    where
        K: CacheKey,
        V: 'static,
    {
        match self {
            EvictionKind::Lru => Box::new(LruPolicy::new()),
            EvictionKind::Lfu => Box::new(LfuPolicy::new()),
            EvictionKind::Fifo => Box::new(FifoPolicy::new()),
            EvictionKind::Ttl => Box::new(TtlPolicy::new()),
        }
    }

    /// Lowercase policy name.
    pub fn as_str(self) -> &'static str {
        match self {
            EvictionKind::Lru => "lru",
            EvictionKind::Lfu => "lfu",
            EvictionKind::Fifo => "fifo",
            EvictionKind::Ttl => "ttl",
        }
    }
}

impl fmt::Display for EvictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known eviction policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown eviction policy '{0}', expected one of: lru, lfu, fifo, ttl")]
pub struct ParseEvictionKindError(pub String);

impl FromStr for EvictionKind {
    type Err = ParseEvictionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(EvictionKind::Lru),
            "lfu" => Ok(EvictionKind::Lfu),
            "fifo" => Ok(EvictionKind::Fifo),
            "ttl" | "time" => Ok(EvictionKind::Ttl),
            _ => Err(ParseEvictionKindError(s.to_string())),
        }
    }
}
