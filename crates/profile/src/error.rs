//! Error types for the profile crate.
//!
//! Only the JSON loader reports errors. The engine itself never fails:
//! invalid movies surface as `None` and missing titles are no-ops.

use thiserror::Error;

/// Errors that can occur while loading or writing a profile document
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Profile file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document is not valid JSON or does not have the profile shape
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A movie entry has an empty, zero or missing title, genre or rating
    ///
    /// `list` names where the entry was found, e.g. `watchlist` or
    /// `friends[1].watched`.
    #[error("Invalid movie at {list}[{index}]: title, genre and rating are required")]
    InvalidMovie { list: String, index: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProfileError>;
