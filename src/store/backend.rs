//! Store Backend Trait
//!
//! The minimal key-value capability consumed by the category index.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::Result;

// == Key Value Store ==
/// Abstract key-value store capability.
///
/// Index maintenance only needs the existence probe and the set
/// primitives; everything else a full client offers stays behind the
/// concrete store type.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns whether any value is stored under `name`.
    async fn exists(&self, name: &str) -> Result<bool>;

    /// Adds members to the set stored under `name`, creating the set if
    /// absent. Returns the number of members newly added.
    async fn set_add(&self, name: &str, members: &[&str]) -> Result<u64>;

    /// Returns the current membership of the set stored under `name`;
    /// empty if the set has never been created.
    async fn set_members(&self, name: &str) -> Result<HashSet<String>>;

    /// Returns whether `member` is in the set stored under `name`.
    async fn set_contains(&self, name: &str, member: &str) -> Result<bool>;
}
