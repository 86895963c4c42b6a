//! Cluster Store Module
//!
//! Shards keys across a fixed set of in-process store nodes.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::category::Category;
use crate::error::Result;
use crate::store::{KeyValueStore, NodeStats, StoreNode};

// == Cluster Store ==
/// Cloneable handle over a fixed set of store nodes.
///
/// Every key routes to one node by a deterministic hash of its bytes, so
/// a key lives on the same node for the lifetime of the cluster. Index
/// sets are ordinary set values and shard the same way as data keys.
#[derive(Debug, Clone)]
pub struct ClusterStore {
    /// Shared nodes, locked individually
    nodes: Vec<Arc<RwLock<StoreNode>>>,
}

/// 64-bit FNV-1a over the key bytes.
///
/// Routing must be stable across runs and between cloned handles, which
/// rules out the randomized std hasher.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

impl ClusterStore {
    // == Constructor ==
    /// Creates a cluster with the given number of nodes (at least one).
    pub fn new(node_count: usize) -> Self {
        let nodes = (0..node_count.max(1))
            .map(|_| Arc::new(RwLock::new(StoreNode::new())))
            .collect();
        Self { nodes }
    }

    // == Routing ==
    /// Returns the index of the node a key routes to.
    pub fn node_for(&self, key: &str) -> usize {
        (fnv1a(key.as_bytes()) % self.nodes.len() as u64) as usize
    }

    fn node(&self, key: &str) -> &Arc<RwLock<StoreNode>> {
        &self.nodes[self.node_for(key)]
    }

    /// Returns the number of nodes in the cluster.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // == String Operations ==
    /// Stores a string value, overwriting any previous value under the key.
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.node(key).write().await.set(key, value)
    }

    /// Retrieves a string value; None if the key does not exist.
    ///
    /// Write lock: reads update node statistics.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        self.node(key).write().await.get(key)
    }

    // == Set Operations ==
    /// Adds members to the set under `key`. Returns the newly-added count.
    pub async fn sadd(&self, key: &str, members: &[&str]) -> Result<u64> {
        self.node(key).write().await.sadd(key, members)
    }

    /// Returns the membership of the set under `key`; empty if absent.
    pub async fn smembers(&self, key: &str) -> Result<HashSet<String>> {
        self.node(key).write().await.smembers(key)
    }

    /// Returns whether `member` is in the set under `key`.
    pub async fn sismember(&self, key: &str, member: &str) -> Result<bool> {
        self.node(key).write().await.sismember(key, member)
    }

    // == List Operations ==
    /// Pushes values onto the front of the list under `key`.
    pub async fn lpush(&self, key: &str, values: &[&str]) -> Result<u64> {
        self.node(key).write().await.lpush(key, values)
    }

    /// Returns the list elements in the inclusive range `[start, stop]`.
    pub async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        self.node(key).write().await.lrange(key, start, stop)
    }

    // == Hash Operations ==
    /// Sets a field in the hash under `key`. Returns true for a new field.
    pub async fn hset(&self, key: &str, field: &str, value: &str) -> Result<bool> {
        self.node(key).write().await.hset(key, field, value)
    }

    /// Returns every field-value pair of the hash under `key`.
    pub async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>> {
        self.node(key).write().await.hgetall(key)
    }

    // == Sorted Set Operations ==
    /// Adds a scored member to the sorted set under `key`.
    pub async fn zadd(&self, key: &str, score: f64, member: &str) -> Result<u64> {
        self.node(key).write().await.zadd(key, score, member)
    }

    /// Returns sorted-set members in the inclusive range `[start, stop]`.
    pub async fn zrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        self.node(key).write().await.zrange(key, start, stop)
    }

    // == Key Operations ==
    /// Returns whether any value is stored under `key`.
    pub async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.node(key).write().await.exists(key))
    }

    /// Returns the kind of the value under `key`, or None if absent.
    pub async fn kind(&self, key: &str) -> Option<Category> {
        self.node(key).write().await.kind(key)
    }

    /// Removes the value under `key`. Returns true when a value was removed.
    pub async fn del(&self, key: &str) -> bool {
        self.node(key).write().await.del(key)
    }

    // == Administration ==
    /// Flushes every node in turn, logging each. Returns the total number
    /// of keys removed across the cluster.
    pub async fn flush_all(&self) -> usize {
        let mut total = 0;
        for (i, node) in self.nodes.iter().enumerate() {
            let removed = node.write().await.flush();
            info!("node {} flushed, {} keys removed", i, removed);
            total += removed;
        }
        total
    }

    /// Returns the total number of keys held across all nodes.
    pub async fn key_count(&self) -> usize {
        let mut total = 0;
        for node in &self.nodes {
            total += node.read().await.len();
        }
        total
    }

    /// Returns a statistics snapshot per node, in node order.
    pub async fn node_stats(&self) -> Vec<NodeStats> {
        let mut stats = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            stats.push(node.read().await.stats());
        }
        stats
    }
}

// == Key Value Store Implementation ==
#[async_trait]
impl KeyValueStore for ClusterStore {
    async fn exists(&self, name: &str) -> Result<bool> {
        ClusterStore::exists(self, name).await
    }

    async fn set_add(&self, name: &str, members: &[&str]) -> Result<u64> {
        self.sadd(name, members).await
    }

    async fn set_members(&self, name: &str) -> Result<HashSet<String>> {
        self.smembers(name).await
    }

    async fn set_contains(&self, name: &str, member: &str) -> Result<bool> {
        self.sismember(name, member).await
    }
}
