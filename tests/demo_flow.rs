//! Integration Tests for the Demo Flow
//!
//! Exercises the public API end to end: typed writes of every kind,
//! read-backs, and per-category key enumeration.

use std::collections::HashSet;

use cluster_cache::{CacheError, CacheWriter, Category, CategoryIndex, ClusterStore};

// == Helper Functions ==

fn create_test_cluster() -> (ClusterStore, CategoryIndex<ClusterStore>, CacheWriter) {
    let store = ClusterStore::new(3);
    let index = CategoryIndex::new(store.clone());
    let writer = CacheWriter::new(store.clone(), index.clone());
    (store, index, writer)
}

fn as_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// == Full Demo Flow ==

#[tokio::test]
async fn test_full_demo_flow() {
    let (store, index, writer) = create_test_cluster();

    // Nothing exists before the first write.
    assert!(!store.exists("a").await.unwrap());

    // String writes and read-back.
    writer.set("a", "hello world!").await.unwrap();
    writer.set("b", "hello cache!").await.unwrap();
    assert_eq!(
        store.get("a").await.unwrap(),
        Some("hello world!".to_string())
    );

    // Set write, kind probe, and read-back.
    assert_eq!(writer.sadd("set1", &["a", "b", "c"]).await.unwrap(), 3);
    assert_eq!(store.kind("set1").await, Some(Category::Set));
    assert_eq!(
        store.smembers("set1").await.unwrap(),
        as_set(&["a", "b", "c"])
    );

    // List write and ordered read-back.
    assert_eq!(writer.lpush("list1", &["1", "2", "3"]).await.unwrap(), 3);
    assert_eq!(
        store.lrange("list1", 0, 999).await.unwrap(),
        vec!["3".to_string(), "2".to_string(), "1".to_string()]
    );

    // Hash writes and read-back.
    writer.hset("hash1", "jimmy", "yang").await.unwrap();
    writer.hset("hash1", "CN", "China").await.unwrap();
    writer.hset("hash1", "US", "United States").await.unwrap();
    let hash = store.hgetall("hash1").await.unwrap();
    assert_eq!(hash.len(), 3);
    assert_eq!(hash.get("CN"), Some(&"China".to_string()));

    // Sorted-set writes with equal scores read back lexically.
    for member in ["3", "2", "1", "4", "5", "6"] {
        writer.zadd("zset1", 0.0, member).await.unwrap();
    }
    assert_eq!(
        store.zrange("zset1", 0, 999).await.unwrap(),
        vec!["1", "2", "3", "4", "5", "6"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );

    // Every written key is enumerable through its category.
    assert_eq!(
        index.list_keys(Category::String).await.unwrap(),
        as_set(&["a", "b"])
    );
    assert_eq!(
        index.list_keys(Category::Set).await.unwrap(),
        as_set(&["set1"])
    );
    assert_eq!(
        index.list_keys(Category::List).await.unwrap(),
        as_set(&["list1"])
    );
    assert_eq!(
        index.list_keys(Category::Hash).await.unwrap(),
        as_set(&["hash1"])
    );
    assert_eq!(
        index.list_keys(Category::SortedSet).await.unwrap(),
        as_set(&["zset1"])
    );
}

// == Cluster Behavior ==

#[tokio::test]
async fn test_keys_shard_across_nodes_transparently() {
    let (store, _, writer) = create_test_cluster();

    for i in 0..30 {
        let key = format!("key{}", i);
        writer.set(&key, &format!("value{}", i)).await.unwrap();
    }

    // Every key reads back regardless of which node holds it.
    for i in 0..30 {
        let key = format!("key{}", i);
        assert_eq!(
            store.get(&key).await.unwrap(),
            Some(format!("value{}", i))
        );
    }

    // 30 data keys plus the STRING index set.
    assert_eq!(store.key_count().await, 31);
}

#[tokio::test]
async fn test_flush_all_resets_data_and_index() {
    let (store, index, writer) = create_test_cluster();

    writer.set("a", "1").await.unwrap();
    writer.sadd("set1", &["m"]).await.unwrap();
    writer.hset("hash1", "f", "v").await.unwrap();
    assert!(store.key_count().await > 0);

    store.flush_all().await;

    assert_eq!(store.key_count().await, 0);
    assert!(!store.exists("a").await.unwrap());
    for category in Category::ALL {
        assert!(index.list_keys(category).await.unwrap().is_empty());
    }
}

// == Error Surface ==

#[tokio::test]
async fn test_cross_kind_write_is_rejected_and_unindexed() {
    let (_, index, writer) = create_test_cluster();

    writer.set("k", "a string").await.unwrap();
    let result = writer.lpush("k", &["v"]).await;
    assert!(matches!(
        result,
        Err(CacheError::WrongType {
            expected: Category::List,
            actual: Category::String,
            ..
        })
    ));

    assert!(!index.list_keys(Category::List).await.unwrap().contains("k"));
}

#[tokio::test]
async fn test_empty_key_is_rejected() {
    let (_, index, writer) = create_test_cluster();

    let result = writer.set("", "value").await;
    assert!(matches!(result, Err(CacheError::InvalidKey(_))));
    let result = index.register(Category::String, "").await;
    assert!(matches!(result, Err(CacheError::InvalidKey(_))));
}
