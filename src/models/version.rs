use std::fmt;

use super::{ECBlockGroup, ECLevel};
use crate::error::{Result, TableError};
use crate::version_table::VersionTable;

/// Smallest symbol side length (version 1)
pub const MIN_DIMENSION: usize = 21;
/// Largest symbol side length (version 40)
pub const MAX_DIMENSION: usize = 177;

/// One QR Code symbol version (1-40) with its block layout for every EC level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    number: u8,
    groups: [ECBlockGroup; 4],
    total_codewords: usize,
}

impl Version {
    /// Build a version entry; `groups` must be in [`ECLevel::ALL`] order.
    ///
    /// The total codeword count is taken from the L group. The other levels must
    /// add up to the same total, which [`VersionTable::build`] checks.
    pub(crate) fn new(number: u8, groups: [ECBlockGroup; 4]) -> Self {
        let total_codewords = groups[ECLevel::L.index()].total_codewords();
        Self {
            number,
            groups,
            total_codewords,
        }
    }

    /// Look up a version in the global table
    pub fn for_number(number: u32) -> Result<&'static Version> {
        VersionTable::global().get_version(number)
    }

    /// Look up the version whose symbol is `dimension` modules wide
    pub fn for_dimension(dimension: usize) -> Result<&'static Version> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) || dimension % 4 != 1 {
            return Err(TableError::InvalidDimension { dimension });
        }
        Self::for_number(((dimension - 17) / 4) as u32)
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Get the size in modules (width = height)
    pub fn dimension(&self) -> usize {
        17 + 4 * self.number as usize
    }

    /// Total codewords (data + EC) in the symbol
    pub fn total_codewords(&self) -> usize {
        self.total_codewords
    }

    /// Block layout for `level`
    pub fn ec_block_group(&self, level: ECLevel) -> &ECBlockGroup {
        &self.groups[level.index()]
    }

    /// Data codewords available at `level`
    pub fn data_codewords(&self, level: ECLevel) -> usize {
        self.total_codewords - self.ec_block_group(level).total_ec_codewords()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ECBlockSpec;

    fn version_one() -> Version {
        Version::new(
            1,
            [
                ECBlockGroup::new(7, vec![ECBlockSpec::new(1, 19)]),
                ECBlockGroup::new(10, vec![ECBlockSpec::new(1, 16)]),
                ECBlockGroup::new(13, vec![ECBlockSpec::new(1, 13)]),
                ECBlockGroup::new(17, vec![ECBlockSpec::new(1, 9)]),
            ],
        )
    }

    #[test]
    fn test_version_size() {
        let v = version_one();
        assert_eq!(v.number(), 1);
        assert_eq!(v.dimension(), 21);
        assert_eq!(v.total_codewords(), 26);
        assert_eq!(v.to_string(), "1");
    }

    #[test]
    fn test_data_codewords_per_level() {
        let v = version_one();
        assert_eq!(v.data_codewords(ECLevel::L), 19);
        assert_eq!(v.data_codewords(ECLevel::M), 16);
        assert_eq!(v.data_codewords(ECLevel::Q), 13);
        assert_eq!(v.data_codewords(ECLevel::H), 9);
        assert_eq!(v.ec_block_group(ECLevel::H).ec_codewords_per_block(), 17);
    }

    #[test]
    fn test_for_dimension() {
        assert_eq!(Version::for_dimension(21).map(Version::number), Ok(1));
        assert_eq!(Version::for_dimension(57).map(Version::number), Ok(10));
        assert_eq!(Version::for_dimension(177).map(Version::number), Ok(40));
        for bad in [0, 17, 22, 23, 24, 181] {
            assert_eq!(
                Version::for_dimension(bad),
                Err(TableError::InvalidDimension { dimension: bad })
            );
        }
    }
}
