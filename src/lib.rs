//! Cluster Cache - a sharded in-memory cache demo
//!
//! Writes values of five data-structure kinds into a small in-process
//! cluster and tracks which keys belong to which kind.

pub mod category;
pub mod config;
pub mod error;
pub mod index;
pub mod store;
pub mod writer;

pub use category::Category;
pub use config::Config;
pub use error::{CacheError, Result};
pub use index::CategoryIndex;
pub use store::{ClusterStore, KeyValueStore};
pub use writer::CacheWriter;
