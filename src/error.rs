//! # Error Types
//!
//! This module defines error types used throughout the hermano library.

use thiserror::Error;

/// Main error type for hermano operations
#[derive(Debug, Error)]
pub enum HermanoError {
    /// Empty required text, out-of-range numeric parameter, or an
    /// unrecognized enum value. Encoding emits no bytes when raised.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Document description failed to parse
    #[error("Document parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
