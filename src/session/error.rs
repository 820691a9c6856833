//! Error types for the interactive session.

use crate::menu::MenuError;
use crate::order::OrderError;
use thiserror::Error;

/// Failures that end a session. Bad input and short payments are not errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured menu could not be loaded.
    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    /// The order pipeline could not be drained.
    #[error("Order pipeline error: {0}")]
    Pipeline(#[from] OrderError),
}
