//! The process-wide table of all 40 QR Code versions.
//!
//! The table is built from fixed literal data, so a failed consistency check is a
//! bug in that data rather than a runtime condition. [`VersionTable::build`]
//! reports such failures as [`TableError::MalformedTable`];
//! [`VersionTable::global`] panics on them.

use std::sync::OnceLock;

use crate::error::{Result, TableError};
use crate::models::{ECLevel, Version};
use crate::tables::build_versions;

/// Number of Model 2 symbol versions
pub const VERSION_COUNT: usize = 40;

/// Immutable lookup table of versions 1-40
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTable {
    versions: Vec<Version>,
}

static GLOBAL_TABLE: OnceLock<VersionTable> = OnceLock::new();

impl VersionTable {
    /// Build and validate the table from the literal Table 9 data
    pub fn build() -> Result<Self> {
        Self::from_versions(build_versions())
    }

    /// The shared table, built on first use
    pub fn global() -> &'static VersionTable {
        GLOBAL_TABLE.get_or_init(|| {
            let table = Self::build().unwrap_or_else(|e| panic!("QR version table: {e}"));
            log::debug!("built QR version table with {} versions", table.len());
            table
        })
    }

    fn from_versions(versions: Vec<Version>) -> Result<Self> {
        if versions.len() != VERSION_COUNT {
            return Err(TableError::MalformedTable {
                version: versions.len().min(u8::MAX as usize) as u8,
                reason: format!("expected {VERSION_COUNT} versions, found {}", versions.len()),
            });
        }
        for (i, version) in versions.iter().enumerate() {
            check_version(i + 1, version)?;
        }
        Ok(Self { versions })
    }

    /// Get the entry for `number` (1-40)
    pub fn get_version(&self, number: u32) -> Result<&Version> {
        match number
            .checked_sub(1)
            .and_then(|index| self.versions.get(index as usize))
        {
            Some(version) => Ok(version),
            None => {
                log::debug!("rejected QR version lookup for {number}");
                Err(TableError::OutOfRange { number })
            }
        }
    }

    /// All versions in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, Version> {
        self.versions.iter()
    }

    /// Number of entries (always 40 for a built table)
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Version 1
    pub fn first(&self) -> Option<&Version> {
        self.versions.first()
    }

    /// Version 40
    pub fn last(&self) -> Option<&Version> {
        self.versions.last()
    }
}

impl<'a> IntoIterator for &'a VersionTable {
    type Item = &'a Version;
    type IntoIter = std::slice::Iter<'a, Version>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn check_version(expected_number: usize, version: &Version) -> Result<()> {
    let malformed = |reason: String| TableError::MalformedTable {
        version: version.number(),
        reason,
    };

    if version.number() as usize != expected_number {
        return Err(malformed(format!("stored at position {expected_number}")));
    }

    let total = version.total_codewords();
    for level in ECLevel::ALL {
        let group = version.ec_block_group(level);
        if group.ec_codewords_per_block() == 0 {
            return Err(malformed(format!("level {level} has no EC codewords per block")));
        }
        if group.specs().is_empty() {
            return Err(malformed(format!("level {level} has no block specs")));
        }
        if let Some(spec) = group
            .specs()
            .iter()
            .find(|spec| spec.count() == 0 || spec.data_codewords() == 0)
        {
            return Err(malformed(format!(
                "level {level} has an empty block spec ({} x {})",
                spec.count(),
                spec.data_codewords()
            )));
        }
        if group.total_codewords() != total {
            return Err(malformed(format!(
                "level {level} totals {} codewords, level L totals {total}",
                group.total_codewords()
            )));
        }
    }
    Ok(())
}
