//! Cache Key Module
//!
//! Defines which types may address the cache and how they are validated.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use crate::error::{CacheError, Result};

// == Cache Key Trait ==
/// A value usable as a cache key.
///
/// Hashability and equality are enforced by the trait bounds. `validate`
/// rejects values of an otherwise usable type that must not address an entry.
pub trait CacheKey: Hash + Eq + Clone + Debug + Send + 'static {
    /// Checks that the key may be stored or looked up.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

macro_rules! always_valid_key {
    ($($ty:ty),* $(,)?) => {
        $(impl CacheKey for $ty {})*
    };
}

always_valid_key!(
    String,
    &'static str,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    char,
    bool,
);

// == Float Key ==
/// A floating-point cache key.
///
/// Keys compare by bit pattern, with `-0.0` and `0.0` treated as the same
/// key. NaN is rejected by `validate` since it never equals itself.
#[derive(Debug, Clone, Copy)]
pub struct FloatKey(pub f64);

impl FloatKey {
    fn bits(self) -> u64 {
        if self.0 == 0.0 {
            0
        } else {
            self.0.to_bits()
        }
    }
}

impl From<f64> for FloatKey {
    fn from(value: f64) -> Self {
        FloatKey(value)
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl CacheKey for FloatKey {
    fn validate(&self) -> Result<()> {
        if self.0.is_nan() {
            return Err(CacheError::InvalidKey("NaN cannot address an entry".to_string()));
        }
        Ok(())
    }
}
