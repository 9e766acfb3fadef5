use clap::{Parser, Subcommand};
use rust_qr_versions::tools::{
    OutputFormat, describe_version, format_from_env, selected_levels, verify_table, version_json,
};
use rust_qr_versions::{ECLevel, Version, VersionTable};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR version table inspection tools")]
struct Cli {
    /// Output format (defaults to QR_TABLE_FORMAT, then text)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the block layout of one version
    Show {
        /// Version number (1-40)
        version: u32,
        /// Only print this error correction level
        #[arg(long)]
        level: Option<ECLevel>,
    },
    /// Print every version
    List {
        /// Only print this error correction level
        #[arg(long)]
        level: Option<ECLevel>,
    },
    /// Find the version for a symbol side length in modules
    Dimension { dimension: usize },
    /// Re-check codeword accounting for the whole table
    Verify,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let format = cli.format.unwrap_or_else(format_from_env);

    let result = match cli.command {
        Command::Show { version, level } => show_cmd(version, level, format),
        Command::List { level } => list_cmd(level, format),
        Command::Dimension { dimension } => dimension_cmd(dimension, format),
        Command::Verify => verify_cmd(format),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            eprintln!("qrtool: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_version(version: &Version, levels: &[ECLevel], format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", describe_version(version, levels)),
        OutputFormat::Json => println!("{}", version_json(version, levels)),
    }
}

fn show_cmd(
    number: u32,
    level: Option<ECLevel>,
    format: OutputFormat,
) -> rust_qr_versions::Result<ExitCode> {
    let version = VersionTable::global().get_version(number)?;
    print_version(version, &selected_levels(level), format);
    Ok(ExitCode::SUCCESS)
}

fn list_cmd(level: Option<ECLevel>, format: OutputFormat) -> rust_qr_versions::Result<ExitCode> {
    let levels = selected_levels(level);
    let table = VersionTable::global();
    match format {
        OutputFormat::Text => {
            for version in table {
                print!("{}", describe_version(version, &levels));
            }
        }
        OutputFormat::Json => {
            let all: Vec<_> = table.iter().map(|v| version_json(v, &levels)).collect();
            println!("{}", serde_json::Value::Array(all));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn dimension_cmd(dimension: usize, format: OutputFormat) -> rust_qr_versions::Result<ExitCode> {
    let version = Version::for_dimension(dimension)?;
    print_version(version, &ECLevel::ALL, format);
    Ok(ExitCode::SUCCESS)
}

fn verify_cmd(format: OutputFormat) -> rust_qr_versions::Result<ExitCode> {
    let report = verify_table(VersionTable::global());
    match format {
        OutputFormat::Text => {
            println!("Checked {} version/level pairs", report.checked);
            for problem in &report.problems {
                println!("  FAIL {problem}");
            }
            if report.is_ok() {
                println!("OK");
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({"checked": report.checked, "problems": report.problems})
        ),
    }
    if report.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
