//! Error types for depcycle operations.
//!
//! [`DependencyGraph`](crate::graph::DependencyGraph) itself never fails;
//! these errors come from reading edge lists and configuration.

use std::io;
use thiserror::Error;

/// The error type for depcycle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading input or configuration.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSONL line that is not a valid edge record.
    #[error("JSON error on line {line}: {source}")]
    Json {
        /// 1-based line number in the input.
        line: usize,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed edge-list line.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
}

/// A specialized Result type for depcycle operations.
pub type Result<T> = std::result::Result<T, Error>;
