use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_versions::{ECLevel, Version, VersionTable};

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("version_table_build", |b| b.iter(VersionTable::build));
}

fn bench_global_lookup(c: &mut Criterion) {
    let table = VersionTable::global();
    c.bench_function("get_version_1_to_40", |b| {
        b.iter(|| {
            for number in 1..=40u32 {
                let _ = black_box(table.get_version(black_box(number)));
            }
        })
    });
}

fn bench_for_dimension(c: &mut Criterion) {
    c.bench_function("for_dimension_177", |b| {
        b.iter(|| Version::for_dimension(black_box(177)))
    });
}

fn bench_group_aggregates(c: &mut Criterion) {
    let table = VersionTable::global();
    c.bench_function("ec_totals_all_levels", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for version in table {
                for level in ECLevel::ALL {
                    let group = version.ec_block_group(level);
                    sum += group.total_ec_codewords() + group.total_data_codewords();
                }
            }
            black_box(sum)
        })
    });
}

fn bench_block_walk(c: &mut Criterion) {
    let group = VersionTable::global()
        .get_version(40)
        .map(|v| v.ec_block_group(ECLevel::H))
        .expect("version 40 exists");
    c.bench_function("blocks_v40_h", |b| {
        b.iter(|| black_box(group).blocks().map(|s| s.data_codewords).sum::<usize>())
    });
}

criterion_group!(
    benches,
    bench_table_build,
    bench_global_lookup,
    bench_for_dimension,
    bench_group_aggregates,
    bench_block_walk
);
criterion_main!(benches);
