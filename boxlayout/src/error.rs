//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid padding: {0} (must be finite and non-negative)")]
    InvalidPadding(f32),
}
