//! Cache Facade Module
//!
//! `MemCache` composes the store, its lock, the evictor task and the logger
//! into the public cache handle.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::{current_timestamp_secs, CacheStats, StatsRecorder, Store};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::logger::Logger;
use crate::tasks::spawn_evictor;

// == MemCache ==
/// Thread-safe key/value cache with optional expiration.
///
/// Entries are reachable by key, and entries added through
/// [`insert_if_absent`](MemCache::insert_if_absent) also by a 1-based
/// positional ID. Positional IDs shift down after every deletion ahead of
/// them, so they are a snapshot view and not a stable handle.
///
/// A single reader/writer lock covers both indexes. Lookups take it shared;
/// mutations and the eviction sweep take it exclusively.
///
/// The evictor stops on [`stop`](MemCache::stop) or when the cache is dropped.
pub struct MemCache<V> {
    store: Arc<RwLock<Store<V>>>,
    stats: Arc<StatsRecorder>,
    logger: Arc<dyn Logger>,
    shutdown: watch::Sender<bool>,
    evictor: JoinHandle<()>,
}

impl<V> MemCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates a cache with the default configuration and starts its evictor.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(logger: impl Logger + 'static) -> Result<Self> {
        Self::with_config(Config::default(), logger)
    }

    /// Creates a cache from `config` and starts its evictor.
    ///
    /// # Errors
    /// - `CacheError::InvalidConfig` if the configuration does not validate
    /// - `CacheError::NoRuntime` if no tokio runtime is running
    pub fn with_config(config: Config, logger: impl Logger + 'static) -> Result<Self> {
        config.validate()?;
        Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(RwLock::new(Store::new()));
        let stats = Arc::new(StatsRecorder::new());
        let logger: Arc<dyn Logger> = Arc::new(logger);
        let (shutdown, shutdown_rx) = watch::channel(false);

        let evictor = spawn_evictor(
            store.clone(),
            stats.clone(),
            logger.clone(),
            config.eviction_interval(),
            shutdown_rx,
        );

        info!(
            "Cache initialized with eviction interval of {}s",
            config.eviction_interval_secs
        );

        Ok(Self {
            store,
            stats,
            logger,
            shutdown,
            evictor,
        })
    }

    // == Lookups ==
    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<V> {
        let store = self.store.read();

        match store.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Returns the value at 1-based positional `id`.
    ///
    /// IDs below 1 or past the last position are not found.
    pub fn get_by_position(&self, id: i64) -> Option<V> {
        self.store
            .read()
            .get_by_position(id)
            .map(|entry| entry.value.clone())
    }

    /// Returns the number of entries.
    pub fn size(&self) -> usize {
        self.store.read().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// Checks whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.store.read().contains(key)
    }

    /// Seconds until `key` expires.
    ///
    /// `None` when the key is absent or never expires.
    pub fn ttl(&self, key: &str) -> Option<u64> {
        self.store
            .read()
            .get(key)
            .and_then(|entry| entry.ttl_remaining(current_timestamp_secs()))
    }

    /// Keys in positional order; index `i` holds positional ID `i + 1`.
    pub fn keys_by_position(&self) -> Vec<String> {
        self.store.read().keys_by_position().to_vec()
    }

    /// Returns an owned copy of every key and value.
    ///
    /// Later mutations are not reflected in the returned map.
    pub fn snapshot(&self) -> HashMap<String, V> {
        self.store.read().snapshot()
    }

    /// Runs `f` against the store while holding the shared lock.
    ///
    /// `f` must not call back into this cache.
    pub fn with_store<R>(&self, f: impl FnOnce(&Store<V>) -> R) -> R {
        let store = self.store.read();
        f(&store)
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.size())
    }

    // == Mutations ==
    /// Inserts a non-expiring entry if `key` is absent.
    ///
    /// Returns the positional ID of the new entry, or `0` if `key` was already
    /// present, in which case nothing changes. The presence check and the
    /// insert happen under one exclusive lock.
    pub fn insert_if_absent(&self, key: &str, value: V) -> u64 {
        self.store.write().insert_if_absent(key, value)
    }

    /// Stores `value` under `key` without expiration.
    pub fn set(&self, key: &str, value: V) {
        self.set_with_expiry(key, value, 0);
    }

    /// Stores `value` under `key`, expiring after `ttl_seconds`.
    ///
    /// A TTL of zero or less never expires. The entry replaces any previous
    /// one for `key`. A key that has no positional ID does not gain one.
    pub fn set_with_expiry(&self, key: &str, value: V, ttl_seconds: i64) {
        let now = current_timestamp_secs();
        self.store
            .write()
            .set_with_expiry(key, value, ttl_seconds, now);
    }

    /// Removes `key` from the cache.
    ///
    /// Every positional ID after the removed entry shifts down by one.
    /// Returns whether `key` was present.
    pub fn delete(&self, key: &str) -> bool {
        self.store.write().delete(key)
    }

    // == Lifecycle ==
    /// Stops the evictor. Entries are left in place.
    ///
    /// Only the first call has an effect.
    pub fn stop(&self) {
        if self.shutdown.send_replace(true) {
            return;
        }

        self.logger.debug(&[&"Memcache is saying goodbye!"]);
    }

    /// Returns true while the evictor task is alive.
    pub fn is_running(&self) -> bool {
        !self.evictor.is_finished()
    }
}

impl<V> std::fmt::Debug for MemCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemCache")
            .field("size", &self.store.read().len())
            .field("stopped", &*self.shutdown.borrow())
            .finish()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::TracingLogger;
    use std::time::Duration;

    fn new_cache() -> MemCache<i32> {
        MemCache::new(TracingLogger).unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = new_cache();

        assert_eq!(cache.get("missing"), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[tokio::test]
    async fn test_positional_shift_scenario() {
        let cache = new_cache();

        assert_eq!(cache.insert_if_absent("a", 1), 1);
        assert_eq!(cache.insert_if_absent("b", 2), 2);
        assert_eq!(cache.get_by_position(1), Some(1));
        assert_eq!(cache.get_by_position(2), Some(2));

        cache.delete("a");

        assert_eq!(cache.get_by_position(1), Some(2));
        assert_eq!(cache.size(), 1);
    }

    #[tokio::test]
    async fn test_insert_if_absent_keeps_existing_value() {
        let cache = new_cache();

        cache.insert_if_absent("a", 1);
        assert_eq!(cache.insert_if_absent("a", 2), 0);
        assert_eq!(cache.get("a"), Some(1));
    }

    #[tokio::test]
    async fn test_set_overwrite() {
        let cache = new_cache();

        cache.set("k", 1);
        cache.set("k", 2);

        assert_eq!(cache.get("k"), Some(2));
        assert_eq!(cache.size(), 1);
        assert!(cache.keys_by_position().is_empty());
    }

    #[tokio::test]
    async fn test_ttl_reporting() {
        let cache = new_cache();

        cache.set_with_expiry("short", 1, 60);
        cache.set("forever", 2);

        let remaining = cache.ttl("short").unwrap();
        assert!((59..=60).contains(&remaining));
        assert_eq!(cache.ttl("forever"), None);
        assert_eq!(cache.ttl("missing"), None);
    }

    #[tokio::test]
    async fn test_with_store_reads_unlocked_variant() {
        let cache = new_cache();
        cache.insert_if_absent("a", 1);
        cache.set("b", 2);

        let (len, positions) = cache.with_store(|store| (store.len(), store.position_count()));
        assert_eq!((len, positions), (2, 1));
    }

    #[tokio::test]
    async fn test_stop_halts_evictor() {
        let cache = new_cache();
        assert!(cache.is_running());

        cache.stop();
        cache.stop();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!cache.is_running());
    }

    #[test]
    fn test_new_without_runtime_fails() {
        let result = MemCache::<i32>::new(TracingLogger);
        assert!(matches!(result, Err(CacheError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let config = Config {
            eviction_interval_secs: 0,
        };
        let result = MemCache::<i32>::with_config(config, TracingLogger);
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }
}
