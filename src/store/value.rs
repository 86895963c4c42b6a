//! Stored Value Module
//!
//! Defines the five value kinds a key can hold.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::category::Category;

// == Value ==
/// A single stored value, one of the five supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Plain string
    Str(String),
    /// Unordered set of members
    Set(HashSet<String>),
    /// List of values, front = most recently pushed
    List(VecDeque<String>),
    /// Field-value hash
    Hash(HashMap<String, String>),
    /// Member-score map, read back ordered by (score, member)
    SortedSet(HashMap<String, f64>),
}

impl Value {
    // == Category ==
    /// Returns the category matching this value's kind.
    pub fn category(&self) -> Category {
        match self {
            Value::Str(_) => Category::String,
            Value::Set(_) => Category::Set,
            Value::List(_) => Category::List,
            Value::Hash(_) => Category::Hash,
            Value::SortedSet(_) => Category::SortedSet,
        }
    }
}
