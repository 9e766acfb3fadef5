//! RustQR version tables - QR Code symbol capacity and error correction layout
//!
//! Reference data from ISO/IEC 18004:2006 Table 9: for each of the 40 symbol
//! versions and each error correction level, how the symbol's codewords are split
//! into error correction blocks. Encoders and decoders read the block layout from
//! here to interleave codewords, size Reed-Solomon blocks and place modules.
//!
//! # Example
//! ```
//! use rust_qr_versions::{ECLevel, Version};
//!
//! let version = Version::for_number(5).unwrap();
//! let group = version.ec_block_group(ECLevel::Q);
//! assert_eq!(version.dimension(), 37);
//! assert_eq!(group.num_blocks(), 4);
//! assert_eq!(group.ec_codewords_per_block(), 18);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Error types
pub mod error;
/// Core data structures (Version, ECBlockGroup, ECBlockSpec, ECLevel)
pub mod models;
/// Literal block layout data
mod tables;
/// Helpers shared by the command-line tools
#[cfg(feature = "cli")]
pub mod tools;
/// The process-wide version table
pub mod version_table;

pub use error::{Result, TableError};
pub use models::{BlockShape, ECBlockGroup, ECBlockSpec, ECLevel, Version};
pub use version_table::VersionTable;

/// Look up a version (1-40) in the global table
///
/// Same as `VersionTable::global().get_version(number)`.
pub fn version(number: u32) -> Result<&'static Version> {
    VersionTable::global().get_version(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_shorthand() {
        assert_eq!(version(1).map(Version::dimension), Ok(21));
        assert_eq!(version(0), Err(TableError::OutOfRange { number: 0 }));
    }
}
