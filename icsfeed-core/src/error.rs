//! Error types for icsfeed.
//!
//! Parsing a feed never fails: malformed input degrades to missing fields or
//! dropped blocks. These errors cover the ambient operations around it, such
//! as reading a feed file or loading configuration.

use thiserror::Error;

/// Errors that can occur outside the parsing core.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for icsfeed operations.
pub type FeedResult<T> = Result<T, FeedError>;
