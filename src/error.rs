use std::io;

use thiserror::Error;

/// Errors raised while loading transactions, validating settings, or
/// rendering results. Mining itself is infallible once its inputs are valid.
#[derive(Debug, Error)]
pub enum Error {
    #[error("minimum support must be at least 1, got {0}")]
    InvalidSupport(u32),
    #[error("maximum itemset length must be at least 1")]
    InvalidMaxLen,
    #[error("malformed row on line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
