//! Error types for cache operations.
//!
//! This module defines [`CacheError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CacheError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CacheError::Other`) for unexpected errors
//! - Construction errors are fatal; per-entry parse errors are swallowed by
//!   directory scans and surface only through direct parsing calls

use thiserror::Error;

/// Core error type for cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Extension does not start with a single dot followed by word characters.
    #[error("Invalid cache extension {extension:?}: expected a dot followed by word characters, e.g. \".opml\"")]
    InvalidExtension { extension: String },

    /// Cache directory path is empty.
    #[error("Invalid cache directory: path must not be empty")]
    InvalidDirectory,

    /// An entry name matched the cache shape but its date token is unparseable.
    #[error("Unparseable date token {token:?} in cache entry {file_name:?}")]
    DateParse { file_name: String, token: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
