//! Logger Module
//!
//! The logging capability the cache is handed at construction. Any backend can
//! be plugged in; `TracingLogger` forwards to `tracing`.

use std::fmt;

// == Logger Trait ==
/// Logging collaborator used for eviction and shutdown notices.
pub trait Logger: Send + Sync {
    /// Logs a formatted message. Called once per evicted key.
    fn printf(&self, args: fmt::Arguments<'_>);

    /// Logs a list of values at debug level. Called on shutdown.
    fn debug(&self, values: &[&dyn fmt::Display]);
}

/// Joins debug values with single spaces.
pub fn join_values(values: &[&dyn fmt::Display]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// == Tracing Logger ==
/// Logger backed by the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn printf(&self, args: fmt::Arguments<'_>) {
        tracing::info!(target: "memcache", "{}", args);
    }

    fn debug(&self, values: &[&dyn fmt::Display]) {
        tracing::debug!(target: "memcache", "{}", join_values(values));
    }
}
