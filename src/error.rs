//! Error types for floem-hold.
//!
//! The press/reveal core never fails; only loading palettes and
//! configuration from disk does.

use thiserror::Error;

/// Errors raised while loading palettes or configuration
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A palette entry whose hex value is not 3 or 6 hex digits
    #[error("invalid hex {hex:?} for color {name:?}")]
    InvalidHex {
        /// Name of the offending entry
        name: String,
        /// The rejected hex value
        hex: String,
    },

    /// A palette with no entries cannot resolve any color
    #[error("palette has no entries")]
    EmptyPalette,
}

/// Result type alias for floem-hold operations
pub type Result<T> = std::result::Result<T, Error>;
