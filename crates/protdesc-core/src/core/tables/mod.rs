//! Reference data for the descriptor engines.
//!
//! Every table is immutable once built. Built-in tables live in static registries and
//! are looked up by name; user tables go through the same validating constructors.

pub mod distance;
pub mod groups;
pub mod property;
mod standard;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum TableError {
    #[error("Invalid property table '{name}': {reason}")]
    InvalidPropertyTable { name: String, reason: String },

    #[error("Invalid group table '{name}': {reason}")]
    InvalidGroupTable { name: String, reason: String },

    #[error("Invalid distance matrix '{name}': {reason}")]
    InvalidDistanceMatrix { name: String, reason: String },

    #[error("Property table '{name}' has zero variance and cannot be normalized")]
    ZeroVariance { name: String },

    #[error("Unknown built-in table '{0}'")]
    UnknownTable(String),
}
