//! Index Module
//!
//! Per-category key registration and enumeration.

mod registry;

pub use registry::CategoryIndex;
