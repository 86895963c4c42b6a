//! Store Node Module
//!
//! Single-node in-memory engine holding values of the five supported kinds.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::category::Category;
use crate::error::{CacheError, Result};
use crate::store::{NodeStats, Value, MAX_KEY_LENGTH};

// == Store Node ==
/// One in-memory storage node.
///
/// Operations follow the usual cache-server semantics: container values
/// are created on first write, reads of missing keys return empty results,
/// and an operation of one kind applied to a key holding another kind
/// fails with `WrongType`. Plain `set` is the exception and overwrites
/// whatever the key held.
#[derive(Debug, Default)]
pub struct StoreNode {
    /// Key-value storage
    entries: HashMap<String, Value>,
    /// Operation statistics
    stats: NodeStats,
}

/// Builds the kind-mismatch error for an operation on `key`.
fn wrong_type(key: &str, expected: Category, actual: Category) -> CacheError {
    CacheError::WrongType {
        key: key.to_string(),
        expected,
        actual,
    }
}

/// Validates a key before any write.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}

/// Normalizes an inclusive `(start, stop)` range over a sequence of `len`
/// elements, resolving negative indices from the end. Returns None when
/// the range selects nothing.
fn normalize_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if len == 0 || start > stop || start >= len {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}

impl StoreNode {
    // == Constructor ==
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    // == String Operations ==
    /// Stores a string value, overwriting any previous value under the key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries
            .insert(key.to_string(), Value::Str(value.to_string()));
        self.stats.record_write();
        self.stats.set_keys(self.entries.len());
        Ok(())
    }

    /// Retrieves a string value; None if the key does not exist.
    pub fn get(&mut self, key: &str) -> Result<Option<String>> {
        self.stats.record_read();
        match self.entries.get(key) {
            Some(Value::Str(value)) => Ok(Some(value.clone())),
            Some(other) => Err(wrong_type(key, Category::String, other.category())),
            None => Ok(None),
        }
    }

    // == Set Operations ==
    /// Adds members to the set under `key`, creating it if absent.
    ///
    /// Returns the number of members newly added; adding an existing
    /// member is a no-op.
    pub fn sadd(&mut self, key: &str, members: &[&str]) -> Result<u64> {
        validate_key(key)?;
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::Set(HashSet::new()));
        let set = match entry {
            Value::Set(set) => set,
            other => {
                let actual = other.category();
                return Err(wrong_type(key, Category::Set, actual));
            }
        };

        let mut added = 0;
        for member in members {
            if set.insert((*member).to_string()) {
                added += 1;
            }
        }

        self.stats.record_write();
        self.stats.set_keys(self.entries.len());
        Ok(added)
    }

    /// Returns the membership of the set under `key`; empty if absent.
    pub fn smembers(&mut self, key: &str) -> Result<HashSet<String>> {
        self.stats.record_read();
        match self.entries.get(key) {
            Some(Value::Set(set)) => Ok(set.clone()),
            Some(other) => Err(wrong_type(key, Category::Set, other.category())),
            None => Ok(HashSet::new()),
        }
    }

    /// Returns whether `member` is in the set under `key`.
    pub fn sismember(&mut self, key: &str, member: &str) -> Result<bool> {
        self.stats.record_read();
        match self.entries.get(key) {
            Some(Value::Set(set)) => Ok(set.contains(member)),
            Some(other) => Err(wrong_type(key, Category::Set, other.category())),
            None => Ok(false),
        }
    }

    // == List Operations ==
    /// Pushes values onto the front of the list under `key`, in argument
    /// order, creating the list if absent. Returns the new list length.
    pub fn lpush(&mut self, key: &str, values: &[&str]) -> Result<u64> {
        validate_key(key)?;
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::List(VecDeque::new()));
        let list = match entry {
            Value::List(list) => list,
            other => {
                let actual = other.category();
                return Err(wrong_type(key, Category::List, actual));
            }
        };

        for value in values {
            list.push_front((*value).to_string());
        }
        let length = list.len() as u64;

        self.stats.record_write();
        self.stats.set_keys(self.entries.len());
        Ok(length)
    }

    /// Returns the list elements in the inclusive range `[start, stop]`.
    ///
    /// Negative indices count from the end; an empty result is returned
    /// for missing keys and out-of-bounds ranges.
    pub fn lrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        self.stats.record_read();
        let list = match self.entries.get(key) {
            Some(Value::List(list)) => list,
            Some(other) => return Err(wrong_type(key, Category::List, other.category())),
            None => return Ok(Vec::new()),
        };

        match normalize_range(list.len(), start, stop) {
            Some((from, to)) => Ok(list
                .iter()
                .skip(from)
                .take(to - from + 1)
                .cloned()
                .collect()),
            None => Ok(Vec::new()),
        }
    }

    // == Hash Operations ==
    /// Sets a field in the hash under `key`, creating the hash if absent.
    ///
    /// Returns true when the field was newly created.
    pub fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<bool> {
        validate_key(key)?;
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::Hash(HashMap::new()));
        let hash = match entry {
            Value::Hash(hash) => hash,
            other => {
                let actual = other.category();
                return Err(wrong_type(key, Category::Hash, actual));
            }
        };

        let was_new = hash.insert(field.to_string(), value.to_string()).is_none();

        self.stats.record_write();
        self.stats.set_keys(self.entries.len());
        Ok(was_new)
    }

    /// Returns every field-value pair of the hash under `key`; empty if absent.
    pub fn hgetall(&mut self, key: &str) -> Result<HashMap<String, String>> {
        self.stats.record_read();
        match self.entries.get(key) {
            Some(Value::Hash(hash)) => Ok(hash.clone()),
            Some(other) => Err(wrong_type(key, Category::Hash, other.category())),
            None => Ok(HashMap::new()),
        }
    }

    // == Sorted Set Operations ==
    /// Adds a scored member to the sorted set under `key`, creating it if
    /// absent. Re-adding a member updates its score.
    ///
    /// Returns the number of members newly added (0 or 1).
    pub fn zadd(&mut self, key: &str, score: f64, member: &str) -> Result<u64> {
        validate_key(key)?;
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::SortedSet(HashMap::new()));
        let zset = match entry {
            Value::SortedSet(zset) => zset,
            other => {
                let actual = other.category();
                return Err(wrong_type(key, Category::SortedSet, actual));
            }
        };

        let added = u64::from(zset.insert(member.to_string(), score).is_none());

        self.stats.record_write();
        self.stats.set_keys(self.entries.len());
        Ok(added)
    }

    /// Returns sorted-set members in the inclusive range `[start, stop]`,
    /// ordered by score and then lexically by member.
    pub fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        self.stats.record_read();
        let zset = match self.entries.get(key) {
            Some(Value::SortedSet(zset)) => zset,
            Some(other) => return Err(wrong_type(key, Category::SortedSet, other.category())),
            None => return Ok(Vec::new()),
        };

        let mut members: Vec<(&String, &f64)> = zset.iter().collect();
        members.sort_by(|a, b| a.1.total_cmp(b.1).then_with(|| a.0.cmp(b.0)));

        match normalize_range(members.len(), start, stop) {
            Some((from, to)) => Ok(members[from..=to]
                .iter()
                .map(|(member, _)| (*member).clone())
                .collect()),
            None => Ok(Vec::new()),
        }
    }

    // == Key Operations ==
    /// Returns whether any value is stored under `key`.
    pub fn exists(&mut self, key: &str) -> bool {
        self.stats.record_read();
        self.entries.contains_key(key)
    }

    /// Returns the kind of the value under `key`, or None if absent.
    pub fn kind(&mut self, key: &str) -> Option<Category> {
        self.stats.record_read();
        self.entries.get(key).map(Value::category)
    }

    /// Removes the value under `key`. Returns true when a value was removed.
    pub fn del(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_write();
            self.stats.set_keys(self.entries.len());
        }
        removed
    }

    // == Flush ==
    /// Removes every value held by the node. Returns the number removed.
    pub fn flush(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.record_flush();
        self.stats.set_keys(0);
        removed
    }

    // == Stats ==
    /// Returns current node statistics.
    pub fn stats(&self) -> NodeStats {
        let mut stats = self.stats.clone();
        stats.set_keys(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of keys held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
