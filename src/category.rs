//! Category Module
//!
//! The closed set of data-structure kinds a cached value can take.

use std::fmt;
use std::str::FromStr;

use crate::error::CacheError;

// == Category ==
/// Data-structure kind of a cached value.
///
/// The label of each category doubles as the reserved key name of that
/// category's index set inside the store, so the labels must never be
/// used as ordinary data keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Plain string value
    String,
    /// Unordered set of members
    Set,
    /// List of values
    List,
    /// Field-value hash
    Hash,
    /// Sorted set of scored members
    SortedSet,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::String,
        Category::Set,
        Category::List,
        Category::Hash,
        Category::SortedSet,
    ];

    // == Label ==
    /// Returns the category label, which is also the index set key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::String => "STRING",
            Category::Set => "SET",
            Category::List => "LIST",
            Category::Hash => "HASH",
            Category::SortedSet => "ZSET",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CacheError;

    /// Parses a category label, case-insensitively.
    ///
    /// Anything outside the closed set fails with `InvalidCategory`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STRING" => Ok(Category::String),
            "SET" => Ok(Category::Set),
            "LIST" => Ok(Category::List),
            "HASH" => Ok(Category::Hash),
            "ZSET" => Ok(Category::SortedSet),
            _ => Err(CacheError::InvalidCategory(s.to_string())),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_every_category() {
        assert_eq!(Category::ALL.len(), 5);
        assert_eq!(Category::ALL[0], Category::String);
        assert_eq!(Category::ALL[4], Category::SortedSet);
    }

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("zset".parse::<Category>().unwrap(), Category::SortedSet);
        assert_eq!("String".parse::<Category>().unwrap(), Category::String);
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let result = "BOGUS".parse::<Category>();
        match result {
            Err(CacheError::InvalidCategory(label)) => assert_eq!(label, "BOGUS"),
            other => panic!("Expected InvalidCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Category::Hash.to_string(), "HASH");
        assert_eq!(Category::SortedSet.to_string(), "ZSET");
    }
}
