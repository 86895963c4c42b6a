//! Category Index Module
//!
//! Tracks which keys belong to which data-structure category, stored as
//! one set per category inside the same store the keys live in.

use std::collections::HashSet;

use crate::category::Category;
use crate::error::{CacheError, Result};
use crate::store::KeyValueStore;

// == Category Index ==
/// Per-category key index over an injected store handle.
///
/// Each category's keys live in a set whose key name is the category
/// label. Registration is idempotent. The check-then-add sequence is not
/// atomic, so two concurrent registrations of the same key may both issue
/// an add; that race is benign because the underlying set add is itself
/// idempotent at the storage layer.
#[derive(Debug, Clone)]
pub struct CategoryIndex<S> {
    /// Injected store handle
    store: S,
}

impl<S: KeyValueStore> CategoryIndex<S> {
    // == Constructor ==
    /// Creates an index over the given store handle.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // == Register ==
    /// Records `key` as belonging to `category`.
    ///
    /// Creates the category's index set on first registration; otherwise
    /// adds the key only if it is not already a member. After a successful
    /// return the key is a member of the category's index set.
    ///
    /// The existence check and the add are separate store round trips, so
    /// no partial-state guarantee is made when the store becomes
    /// unavailable between them.
    pub async fn register(&self, category: Category, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey("key cannot be empty".to_string()));
        }

        let index_set = category.as_str();
        if !self.store.exists(index_set).await? {
            self.store.set_add(index_set, &[key]).await?;
        } else if !self.store.set_contains(index_set, key).await? {
            self.store.set_add(index_set, &[key]).await?;
        }
        Ok(())
    }

    // == List Keys ==
    /// Returns every key registered under `category`; empty if none ever
    /// was. Ordering is store-dependent.
    pub async fn list_keys(&self, category: Category) -> Result<HashSet<String>> {
        self.store.set_members(category.as_str()).await
    }
}
