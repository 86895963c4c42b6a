//! Node Statistics Module
//!
//! Tracks operation counters for a single store node.

use serde::Serialize;

// == Node Stats ==
/// Operation counters for one store node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeStats {
    /// Number of read operations served
    pub reads: u64,
    /// Number of write operations applied
    pub writes: u64,
    /// Number of times the node was flushed
    pub flushes: u64,
    /// Current number of keys held
    pub keys: usize,
    /// Node start time in RFC 3339 format
    pub started_at: String,
}

impl NodeStats {
    // == Constructor ==
    /// Creates stats with all counters at zero, stamped with the current time.
    pub fn new() -> Self {
        Self {
            reads: 0,
            writes: 0,
            flushes: 0,
            keys: 0,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    // == Record Read ==
    /// Increments the read counter.
    pub fn record_read(&mut self) {
        self.reads += 1;
    }

    // == Record Write ==
    /// Increments the write counter.
    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    // == Record Flush ==
    /// Increments the flush counter.
    pub fn record_flush(&mut self) {
        self.flushes += 1;
    }

    // == Update Key Count ==
    /// Updates the held-key count.
    pub fn set_keys(&mut self, count: usize) {
        self.keys = count;
    }
}

impl Default for NodeStats {
    fn default() -> Self {
        Self::new()
    }
}
