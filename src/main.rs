//! Cluster Cache Demo
//!
//! Connects to the in-process cluster, writes sample values of each
//! data-structure kind, reads them back, and logs the results.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cluster_cache::{CacheWriter, Category, CategoryIndex, ClusterStore, Config};

/// Main entry point for the cluster cache demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cluster store, category index, and typed writer
/// 4. Enumerate nodes and optionally flush them
/// 5. Write and read back a value of each data-structure kind
/// 6. Enumerate every category's indexed keys
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cluster_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cluster cache demo");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: node_count={}, flush_on_start={}, list_range_limit={}",
        config.node_count, config.flush_on_start, config.list_range_limit
    );

    let store = ClusterStore::new(config.node_count);
    let index = CategoryIndex::new(store.clone());
    let writer = CacheWriter::new(store.clone(), index.clone());

    // Enumerate nodes, clearing leftover data from earlier runs
    for (i, stats) in store.node_stats().await.into_iter().enumerate() {
        info!("node {} => {}", i, serde_json::to_string(&stats)?);
    }
    if config.flush_on_start {
        let removed = store.flush_all().await;
        info!("flush complete, {} keys removed", removed);
    }

    // Existence probe before any write
    info!("exists(\"a\") = {}", store.exists("a").await?);

    // String write test
    writer.set("a", "hello world!").await?;
    writer.set("b", "hello cache!").await?;

    // String read test
    info!("get(\"a\") = {:?}", store.get("a").await?);

    // Set write test
    info!("set write ==>");
    let added = writer.sadd("set1", &["a", "b", "c"]).await?;
    info!("sadd(\"set1\") added {}", added);

    // Kind probe
    info!("kind(\"set1\") = {:?}", store.kind("set1").await);

    // Set read test
    info!("set read ==>");
    for member in store.smembers("set1").await? {
        info!("{}", member);
    }

    // List write test
    info!("list write ==>");
    let length = writer.lpush("list1", &["1", "2", "3"]).await?;
    info!("lpush(\"list1\") length {}", length);

    // List read test
    info!("list read ==>");
    for value in store.lrange("list1", 0, config.list_range_limit).await? {
        info!("{}", value);
    }

    // Hash write test
    info!("hash write ==>");
    writer.hset("hash1", "jimmy", "yang").await?;
    writer.hset("hash1", "CN", "China").await?;
    writer.hset("hash1", "US", "United States").await?;

    // Hash read test
    info!("hash read ==>");
    for (field, value) in store.hgetall("hash1").await? {
        info!("{}: {}", field, value);
    }

    // Sorted-set write test
    info!("zset write ==>");
    for member in ["3", "2", "1", "4", "5", "6"] {
        let added = writer.zadd("zset1", 0.0, member).await?;
        info!("zadd(\"zset1\", {}) added {}", member, added);
    }

    // Sorted-set read test
    info!("zset read ==>");
    for member in store.zrange("zset1", 0, config.list_range_limit).await? {
        info!("{}", member);
    }

    // Enumerate every indexed key per category
    info!("indexed keys by category ==>");
    for category in Category::ALL {
        let keys = index.list_keys(category).await?;
        info!("{} => {:?}", category, keys);
    }

    info!("Demo complete");
    Ok(())
}
