use proptest::prelude::*;
use rust_qr_versions::{ECLevel, TableError, Version, VersionTable};

fn any_level() -> impl Strategy<Value = ECLevel> {
    prop::sample::select(ECLevel::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_lookup_in_range_returns_matching_entry(number in 1u32..=40) {
        let v = VersionTable::global().get_version(number).unwrap();
        prop_assert_eq!(v.number() as u32, number);
        prop_assert_eq!(v.dimension(), 17 + 4 * number as usize);
    }

    #[test]
    fn prop_lookup_out_of_range_fails(number in prop_oneof![Just(0u32), 41u32..]) {
        prop_assert_eq!(
            VersionTable::global().get_version(number),
            Err(TableError::OutOfRange { number })
        );
    }

    #[test]
    fn prop_blocks_account_for_symbol(number in 1u32..=40, level in any_level()) {
        let v = Version::for_number(number).unwrap();
        let group = v.ec_block_group(level);
        let walked: usize = group
            .blocks()
            .map(|b| b.data_codewords + b.ec_codewords)
            .sum();
        prop_assert_eq!(group.blocks().count(), group.num_blocks());
        prop_assert_eq!(walked, v.total_codewords());
    }

    #[test]
    fn prop_dimension_roundtrip(dimension in 0usize..200) {
        match Version::for_dimension(dimension) {
            Ok(v) => prop_assert_eq!(v.dimension(), dimension),
            Err(e) => {
                prop_assert_eq!(e, TableError::InvalidDimension { dimension });
                prop_assert!(dimension < 21 || dimension > 177 || dimension % 4 != 1);
            }
        }
    }
}
