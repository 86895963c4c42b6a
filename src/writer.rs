//! Typed Write Facade
//!
//! Category-specific writes that keep the category index up to date.

use crate::category::Category;
use crate::error::Result;
use crate::index::CategoryIndex;
use crate::store::ClusterStore;

// == Cache Writer ==
/// Pairs each typed store write with an index registration.
///
/// The store write and the registration are two independent calls, not a
/// transaction: a failure between them leaves the value stored but
/// unindexed. A failed write registers nothing.
#[derive(Debug, Clone)]
pub struct CacheWriter {
    /// Cluster the values are written into
    store: ClusterStore,
    /// Index updated after each successful write
    index: CategoryIndex<ClusterStore>,
}

impl CacheWriter {
    // == Constructor ==
    /// Creates a writer over the given cluster and index handles.
    pub fn new(store: ClusterStore, index: CategoryIndex<ClusterStore>) -> Self {
        Self { store, index }
    }

    // == String ==
    /// Stores a string value and registers the key under STRING.
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.store.set(key, value).await?;
        self.index.register(Category::String, key).await
    }

    // == Set ==
    /// Adds set members and registers the key under SET.
    /// Returns the number of members newly added.
    pub async fn sadd(&self, key: &str, members: &[&str]) -> Result<u64> {
        let added = self.store.sadd(key, members).await?;
        self.index.register(Category::Set, key).await?;
        Ok(added)
    }

    // == List ==
    /// Pushes list values and registers the key under LIST.
    /// Returns the new list length.
    pub async fn lpush(&self, key: &str, values: &[&str]) -> Result<u64> {
        let length = self.store.lpush(key, values).await?;
        self.index.register(Category::List, key).await?;
        Ok(length)
    }

    // == Hash ==
    /// Sets a hash field and registers the key under HASH.
    /// Returns true when the field was newly created.
    pub async fn hset(&self, key: &str, field: &str, value: &str) -> Result<bool> {
        let was_new = self.store.hset(key, field, value).await?;
        self.index.register(Category::Hash, key).await?;
        Ok(was_new)
    }

    // == Sorted Set ==
    /// Adds a scored member and registers the key under ZSET.
    /// Returns the number of members newly added.
    pub async fn zadd(&self, key: &str, score: f64, member: &str) -> Result<u64> {
        let added = self.store.zadd(key, score, member).await?;
        self.index.register(Category::SortedSet, key).await?;
        Ok(added)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    fn setup() -> (ClusterStore, CategoryIndex<ClusterStore>, CacheWriter) {
        let store = ClusterStore::new(3);
        let index = CategoryIndex::new(store.clone());
        let writer = CacheWriter::new(store.clone(), index.clone());
        (store, index, writer)
    }

    #[tokio::test]
    async fn test_each_write_registers_under_its_category() {
        let (_, index, writer) = setup();

        writer.set("str1", "value").await.unwrap();
        writer.sadd("set1", &["a"]).await.unwrap();
        writer.lpush("list1", &["1"]).await.unwrap();
        writer.hset("hash1", "f", "v").await.unwrap();
        writer.zadd("zset1", 1.0, "m").await.unwrap();

        let expectations = [
            (Category::String, "str1"),
            (Category::Set, "set1"),
            (Category::List, "list1"),
            (Category::Hash, "hash1"),
            (Category::SortedSet, "zset1"),
        ];
        for (category, key) in expectations {
            let keys = index.list_keys(category).await.unwrap();
            assert_eq!(keys.len(), 1, "{} should hold exactly one key", category);
            assert!(keys.contains(key));
        }
    }

    #[tokio::test]
    async fn test_repeated_writes_register_once() {
        let (_, index, writer) = setup();

        writer.set("str1", "v1").await.unwrap();
        writer.set("str1", "v2").await.unwrap();

        let keys = index.list_keys(Category::String).await.unwrap();
        assert_eq!(keys.len(), 1);
    }

    #[tokio::test]
    async fn test_written_values_read_back() {
        let (store, _, writer) = setup();

        writer.set("str1", "hello").await.unwrap();
        writer.sadd("set1", &["a", "b"]).await.unwrap();
        writer.lpush("list1", &["1", "2"]).await.unwrap();

        assert_eq!(store.get("str1").await.unwrap(), Some("hello".to_string()));
        assert_eq!(store.smembers("set1").await.unwrap().len(), 2);
        assert_eq!(
            store.lrange("list1", 0, 999).await.unwrap(),
            vec!["2".to_string(), "1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failed_write_registers_nothing() {
        let (_, index, writer) = setup();

        writer.set("k", "a string").await.unwrap();
        let result = writer.sadd("k", &["m"]).await;
        assert!(matches!(result, Err(CacheError::WrongType { .. })));

        let sets = index.list_keys(Category::Set).await.unwrap();
        assert!(!sets.contains("k"));
    }
}
