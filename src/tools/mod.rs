use crate::models::{ECBlockGroup, ECLevel, Version};
use crate::version_table::VersionTable;
use serde_json::{Value, json};
use std::env;

/// Output format for the command-line tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines.
    Text,
    /// One JSON document.
    Json,
}

/// Default output format from environment variables.
///
/// Reads `QR_TABLE_FORMAT` (`text` or `json`); anything else falls back to text.
pub fn format_from_env() -> OutputFormat {
    match env::var("QR_TABLE_FORMAT") {
        Ok(value) if value.trim().eq_ignore_ascii_case("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

/// Levels to report: the requested one, or all four.
pub fn selected_levels(level: Option<ECLevel>) -> Vec<ECLevel> {
    match level {
        Some(level) => vec![level],
        None => ECLevel::ALL.to_vec(),
    }
}

/// Render a block group as `ec=18 blocks=4 [2x15, 2x16]`.
pub fn group_summary(group: &ECBlockGroup) -> String {
    let specs: Vec<String> = group
        .specs()
        .iter()
        .map(|spec| format!("{}x{}", spec.count(), spec.data_codewords()))
        .collect();
    format!(
        "ec={} blocks={} [{}]",
        group.ec_codewords_per_block(),
        group.num_blocks(),
        specs.join(", ")
    )
}

/// Multi-line text description of one version.
pub fn describe_version(version: &Version, levels: &[ECLevel]) -> String {
    let mut out = format!(
        "Version {}: {}x{} modules, {} codewords\n",
        version,
        version.dimension(),
        version.dimension(),
        version.total_codewords()
    );
    for &level in levels {
        let group = version.ec_block_group(level);
        out.push_str(&format!(
            "  {}: data={} ecc={} {}\n",
            level,
            version.data_codewords(level),
            group.total_ec_codewords(),
            group_summary(group)
        ));
    }
    out
}

/// JSON description of one version.
pub fn version_json(version: &Version, levels: &[ECLevel]) -> Value {
    let groups: Vec<Value> = levels
        .iter()
        .map(|&level| {
            let group = version.ec_block_group(level);
            let specs: Vec<Value> = group
                .specs()
                .iter()
                .map(|spec| json!({"count": spec.count(), "data_codewords": spec.data_codewords()}))
                .collect();
            json!({
                "level": level.to_string(),
                "ec_codewords_per_block": group.ec_codewords_per_block(),
                "num_blocks": group.num_blocks(),
                "total_ec_codewords": group.total_ec_codewords(),
                "data_codewords": version.data_codewords(level),
                "specs": specs,
            })
        })
        .collect();
    json!({
        "version": version.number(),
        "dimension": version.dimension(),
        "total_codewords": version.total_codewords(),
        "levels": groups,
    })
}

/// Outcome of re-checking the table's accounting rules.
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    /// Number of (version, level) pairs checked.
    pub checked: usize,
    /// One line per failed check.
    pub problems: Vec<String>,
}

impl VerifyReport {
    /// True when no check failed.
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check dimensions and per-level codeword accounting for every entry.
pub fn verify_table(table: &VersionTable) -> VerifyReport {
    let mut report = VerifyReport::default();
    let mut last_dimension = 0usize;

    for version in table {
        let dimension = version.dimension();
        if dimension <= last_dimension || dimension % 4 != 1 {
            report
                .problems
                .push(format!("version {version}: unexpected dimension {dimension}"));
        }
        last_dimension = dimension;

        for level in ECLevel::ALL {
            report.checked += 1;
            let group = version.ec_block_group(level);
            if group.num_blocks() == 0 || group.ec_codewords_per_block() == 0 {
                report
                    .problems
                    .push(format!("version {version} level {level}: empty group"));
            }
            let accounted = group.total_ec_codewords() + group.total_data_codewords();
            if accounted != version.total_codewords() {
                report.problems.push(format!(
                    "version {version} level {level}: {accounted} codewords, expected {}",
                    version.total_codewords()
                ));
            }
        }
    }

    report
}
