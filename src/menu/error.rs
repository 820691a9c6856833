//! Error types for loading the menu catalog.

use thiserror::Error;

/// Errors that can occur while loading a menu catalog from disk.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The menu file could not be read.
    #[error("Failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    /// The menu file is not valid JSON or does not match the catalog layout.
    #[error("Malformed menu file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share the same lookup key.
    #[error("Duplicate menu key: {0}")]
    DuplicateKey(String),

    /// An entry has a zero or negative price.
    #[error("Invalid price for menu key {0}")]
    InvalidPrice(String),

    /// An entry's price has more than two decimal places.
    #[error("Price for menu key {0} has more than two decimals")]
    TooPrecise(String),

    /// The menu file contains no entries.
    #[error("Menu is empty")]
    Empty,
}
