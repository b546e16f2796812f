//! Cache Module
//!
//! Entry model, dual-index store and statistics.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_secs, Entry, NO_EXPIRATION};
pub use stats::{CacheStats, StatsRecorder};
pub use store::Store;
