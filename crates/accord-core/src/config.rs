//! Cache configuration.

/// Build-time switch for the connections cache.
///
/// Handed to the cache constructor as an explicit value so both states can
/// be exercised without touching process environment. The default is
/// disabled: a cache that was never switched on stays permanently empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Whether the cache precomputes at all. When false every lookup
    /// reports "disconnected" regardless of input.
    pub precompute: bool,
}

impl CacheConfig {
    /// Configuration with precomputation switched on.
    pub fn enabled() -> Self {
        Self { precompute: true }
    }

    /// Configuration with precomputation switched off.
    pub fn disabled() -> Self {
        Self { precompute: false }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::disabled()
    }
}
