//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with expiration support.

use std::time::{SystemTime, UNIX_EPOCH};

/// Expiration value meaning "never expires".
pub const NO_EXPIRATION: u64 = 0;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix seconds), 0 = no expiration
    pub expires_at: u64,
    /// Key the entry was inserted under
    pub origin_key: String,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates a new entry.
    ///
    /// # Arguments
    /// * `origin_key` - The key the entry is stored under
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds; zero or negative never expires
    /// * `now` - Current Unix time in seconds
    pub fn new(origin_key: impl Into<String>, value: V, ttl_seconds: i64, now: u64) -> Self {
        let expires_at = if ttl_seconds > 0 {
            now.saturating_add(ttl_seconds as u64)
        } else {
            NO_EXPIRATION
        };

        Self {
            value,
            expires_at,
            origin_key: origin_key.into(),
        }
    }

    /// Creates an entry that never expires.
    pub fn persistent(origin_key: impl Into<String>, value: V) -> Self {
        Self {
            value,
            expires_at: NO_EXPIRATION,
            origin_key: origin_key.into(),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is expired once `now` reaches its expiration time. Entries
    /// without expiration never expire.
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at != NO_EXPIRATION && self.expires_at <= now
    }

    // == Time To Live ==
    /// Returns remaining TTL in seconds, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(0)` if the entry has expired
    /// - `Some(remaining)` if the entry has TTL and hasn't expired
    /// - `None` if the entry never expires
    pub fn ttl_remaining(&self, now: u64) -> Option<u64> {
        if self.expires_at == NO_EXPIRATION {
            None
        } else {
            Some(self.expires_at.saturating_sub(now))
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds. A clock set before the epoch reads as 0.
pub fn current_timestamp_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
