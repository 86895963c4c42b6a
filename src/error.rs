//! Error types for the cache demo
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::category::Category;

// == Cache Error Enum ==
/// Unified error type for store and index operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The underlying store could not be reached
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Category label outside the closed set
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Key failed local validation
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Operation kind does not match the kind stored under the key
    #[error("Wrong type for key '{key}': expected {expected}, found {actual}")]
    WrongType {
        key: String,
        expected: Category,
        actual: Category,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the cache demo.
pub type Result<T> = std::result::Result<T, CacheError>;
