//! Error types for version table lookups and construction.

use thiserror::Error;

/// Errors reported by the version table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A version number outside 1..=40 was passed to a lookup.
    #[error("version number {number} is out of range (expected 1..=40)")]
    OutOfRange {
        /// The rejected version number.
        number: u32,
    },

    /// The literal table data failed a consistency check while building.
    #[error("malformed table entry for version {version}: {reason}")]
    MalformedTable {
        /// Version whose entry is inconsistent.
        version: u8,
        /// What the check found.
        reason: String,
    },

    /// A symbol dimension that no version produces.
    #[error("no QR version has dimension {dimension} (expected 21..=177, 1 mod 4)")]
    InvalidDimension {
        /// The rejected dimension, in modules.
        dimension: usize,
    },

    /// An error-correction level name other than L, M, Q or H.
    #[error("unknown error correction level {0:?}")]
    UnknownLevel(String),
}

/// Convenience `Result` alias using [`TableError`].
pub type Result<T> = std::result::Result<T, TableError>;
