/// One run of identically sized blocks: `count` blocks of `data_codewords` each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ECBlockSpec {
    count: usize,
    data_codewords: usize,
}

impl ECBlockSpec {
    pub(crate) const fn new(count: usize, data_codewords: usize) -> Self {
        Self {
            count,
            data_codewords,
        }
    }

    /// Number of blocks with this shape
    pub fn count(&self) -> usize {
        self.count
    }

    /// Data codewords in each block of this shape
    pub fn data_codewords(&self) -> usize {
        self.data_codewords
    }

    /// Codewords (data + EC) taken up by all blocks of this shape
    pub fn total_codewords(&self, ec_codewords_per_block: usize) -> usize {
        self.count * (self.data_codewords + ec_codewords_per_block)
    }
}

/// Size of a single error-correction block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockShape {
    /// Data codewords carried by the block
    pub data_codewords: usize,
    /// EC codewords appended to the block
    pub ec_codewords: usize,
}

/// Block partition for one (version, EC level) pair.
///
/// Every block in the group shares the same number of EC codewords. The specs
/// are kept in the order the standard lists them; interleaving walks blocks in
/// that order, so it must not be changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ECBlockGroup {
    ec_codewords_per_block: usize,
    specs: Vec<ECBlockSpec>,
}

impl ECBlockGroup {
    pub(crate) fn new(ec_codewords_per_block: usize, specs: Vec<ECBlockSpec>) -> Self {
        Self {
            ec_codewords_per_block,
            specs,
        }
    }

    /// EC codewords in every block of this group
    pub fn ec_codewords_per_block(&self) -> usize {
        self.ec_codewords_per_block
    }

    /// Total number of blocks across all specs
    pub fn num_blocks(&self) -> usize {
        self.specs.iter().map(ECBlockSpec::count).sum()
    }

    /// EC codewords across all blocks
    pub fn total_ec_codewords(&self) -> usize {
        self.ec_codewords_per_block * self.num_blocks()
    }

    /// Data codewords across all blocks
    pub fn total_data_codewords(&self) -> usize {
        self.specs
            .iter()
            .map(|spec| spec.count * spec.data_codewords)
            .sum()
    }

    /// Data + EC codewords across all blocks
    pub fn total_codewords(&self) -> usize {
        self.specs
            .iter()
            .map(|spec| spec.total_codewords(self.ec_codewords_per_block))
            .sum()
    }

    /// Block specs in standard order
    pub fn specs(&self) -> &[ECBlockSpec] {
        &self.specs
    }

    /// Every individual block, in the order codewords are interleaved
    pub fn blocks(&self) -> impl Iterator<Item = BlockShape> + '_ {
        let ec_codewords = self.ec_codewords_per_block;
        self.specs.iter().flat_map(move |spec| {
            std::iter::repeat_n(
                BlockShape {
                    data_codewords: spec.data_codewords,
                    ec_codewords,
                },
                spec.count,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_group() -> ECBlockGroup {
        // Version 5, level Q
        ECBlockGroup::new(18, vec![ECBlockSpec::new(2, 15), ECBlockSpec::new(2, 16)])
    }

    #[test]
    fn test_num_blocks_sums_all_specs() {
        let group = split_group();
        assert_eq!(group.num_blocks(), 4);
        assert_eq!(group.total_ec_codewords(), 72);
        assert_eq!(group.total_data_codewords(), 62);
        assert_eq!(group.total_codewords(), 134);
    }

    #[test]
    fn test_single_spec_group() {
        let group = ECBlockGroup::new(7, vec![ECBlockSpec::new(1, 19)]);
        assert_eq!(group.num_blocks(), 1);
        assert_eq!(group.total_codewords(), 26);
        assert_eq!(group.specs()[0].total_codewords(7), 26);
    }

    #[test]
    fn test_blocks_expand_in_order() {
        let shapes: Vec<usize> = split_group().blocks().map(|b| b.data_codewords).collect();
        assert_eq!(shapes, vec![15, 15, 16, 16]);
        assert!(split_group().blocks().all(|b| b.ec_codewords == 18));
    }
}
