//! Error types for the Java minimizer.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for minimizer operations
#[derive(Debug, Error)]
pub enum MinimizeError {
    /// The source text does not form a valid compilation unit
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// Valid syntax the minimizer does not handle, e.g. top-level statements
    #[error("unsupported `{kind}` at {line}:{column}")]
    Unsupported {
        kind: String,
        line: usize,
        column: usize,
    },

    /// The Java grammar could not be loaded into the tree-sitter runtime
    #[error("grammar error: {0}")]
    Grammar(String),

    /// A configured source root could not be scanned
    #[error("cannot scan source root {}: {message}", path.display())]
    Root { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl MinimizeError {
    pub fn config(msg: impl Into<String>) -> Self {
        MinimizeError::Config(msg.into())
    }

    /// Parse and unsupported-construct errors leave the file untouched.
    pub fn is_syntax(&self) -> bool {
        matches!(self, MinimizeError::Parse { .. } | MinimizeError::Unsupported { .. })
    }
}

/// Result type alias for minimizer operations
pub type Result<T> = std::result::Result<T, MinimizeError>;
