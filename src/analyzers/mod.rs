//! Grouped aggregation over specimen records.
//!
//! This module holds the generic group-by engine, the numeric helpers it
//! relies on, and the named penguin aggregations built on top of it.

pub mod aggregate;
pub mod penguins;
pub mod types;
pub mod utility;
