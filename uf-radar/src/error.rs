//! Error types for the UF decoder.

use thiserror::Error;

/// Result type alias for decoder operations.
pub type Result<T> = std::result::Result<T, UfError>;

/// Errors produced while reading or decoding a UF file.
///
/// Every error is fatal to the whole [`crate::read_uf`] call (spec §7): no
/// partial volume is ever returned to the caller.
#[derive(Error, Debug)]
pub enum UfError {
    /// The underlying stream could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The "UF" magic was absent, a structural offset pointed outside the
    /// record, the record was truncated, or `bits_per_bin != 16`.
    #[error("invalid UF format: {0}")]
    InvalidFormat(String),

    /// An option passed to `read_uf` was not recognized.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}
