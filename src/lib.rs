//! Memcache - An in-process key/value cache
//!
//! Provides key and positional lookup with TTL expiration handled by a
//! background eviction task.

pub mod cache;
pub mod config;
pub mod error;
pub mod logger;
pub mod memcache;
pub mod tasks;

pub use cache::CacheStats;
pub use config::Config;
pub use error::{CacheError, Result};
pub use logger::{Logger, TracingLogger};
pub use memcache::MemCache;
