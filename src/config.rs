//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Default period between eviction sweeps, in seconds.
pub const DEFAULT_EVICTION_INTERVAL: u64 = 1;

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interval in seconds between eviction sweeps
    pub eviction_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EVICTION_INTERVAL` - Sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        Self {
            eviction_interval_secs: env::var("EVICTION_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_EVICTION_INTERVAL),
        }
    }

    /// Rejects settings the evictor cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.eviction_interval_secs == 0 {
            return Err(CacheError::InvalidConfig(
                "eviction interval must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Sweep period as a `Duration`.
    pub fn eviction_interval(&self) -> Duration {
        Duration::from_secs(self.eviction_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eviction_interval_secs: DEFAULT_EVICTION_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.eviction_interval_secs, 1);
        assert_eq!(config.eviction_interval(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the variable to avoid racing other tests
        env::remove_var("EVICTION_INTERVAL");
        assert_eq!(Config::from_env().eviction_interval_secs, 1);

        env::set_var("EVICTION_INTERVAL", "5");
        assert_eq!(Config::from_env().eviction_interval_secs, 5);

        env::set_var("EVICTION_INTERVAL", "not-a-number");
        assert_eq!(Config::from_env().eviction_interval_secs, 1);

        env::remove_var("EVICTION_INTERVAL");
    }

    #[test]
    fn test_config_rejects_zero_interval() {
        let config = Config {
            eviction_interval_secs: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfig(_))
        ));
    }
}
