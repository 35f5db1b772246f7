pub mod aaindex;
pub mod tables;

use crate::core::tables::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("AAindex parsing error for '{path}': {source}")]
    AaIndex {
        path: String,
        source: aaindex::AaIndexError,
    },
    #[error("Invalid table in '{path}': {source}")]
    Table { path: String, source: TableError },
}
