//! Configuration Module
//!
//! Handles loading demo configuration from environment variables.

use std::env;

/// Demo configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of store nodes in the cluster
    pub node_count: usize,
    /// Whether to flush every node before the demo writes
    pub flush_on_start: bool,
    /// Upper bound passed to list and sorted-set read-backs
    pub list_range_limit: i64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `NODE_COUNT` - Number of cluster nodes (default: 3)
    /// - `FLUSH_ON_START` - Flush nodes before writing (default: true)
    /// - `LIST_RANGE_LIMIT` - Read-back range bound (default: 999)
    pub fn from_env() -> Self {
        Self {
            node_count: env::var("NODE_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            flush_on_start: env::var("FLUSH_ON_START")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            list_range_limit: env::var("LIST_RANGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(999),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_count: 3,
            flush_on_start: true,
            list_range_limit: 999,
        }
    }
}
