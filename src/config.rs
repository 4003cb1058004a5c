//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::eviction::EvictionKind;

/// Cache construction parameters.
///
/// The default is an unbounded cache whose entries never expire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL applied to entries set without an explicit TTL
    pub default_ttl: Option<Duration>,
    /// Entry count above which the eviction policy is consulted
    pub max_size: Option<usize>,
    /// Eviction policy to build, None = never evict
    pub eviction: Option<EvictionKind>,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds, 0 = no expiry (default: none)
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: unbounded)
    /// - `CACHE_EVICTION_POLICY` - One of `lru`, `lfu`, `fifo`, `ttl` (default: none)
    ///
    /// Unparseable values are logged and treated as unset.
    pub fn from_env() -> Self {
        Self {
            default_ttl: parse_env::<u64>("CACHE_DEFAULT_TTL")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            max_size: parse_env("CACHE_MAX_SIZE"),
            eviction: parse_env("CACHE_EVICTION_POLICY"),
        }
    }

    /// Sets the default TTL. A zero duration clears it, as in `from_env`.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl).filter(|ttl| !ttl.is_zero());
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn with_eviction(mut self, kind: EvictionKind) -> Self {
        self.eviction = Some(kind);
        self
    }
}

fn parse_env<T>(name: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Ignoring {}={:?}: {}", name, raw, err);
            None
        }
    }
}
