use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

mod report;

/// Fixed default location of the master dataset.
const DEFAULT_MASTER: &str = "master_finances.csv";

#[derive(Parser, Debug)]
#[command(name = "spendpace", version, about = "Monthly spending consolidation and forecasting")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a monthly export and fold it into the master dataset
    Consolidate {
        /// Input monthly export CSV
        input: PathBuf,

        /// Master dataset file
        #[arg(short, long, default_value = DEFAULT_MASTER)]
        output: PathBuf,

        /// Append to an existing master (replaces the month if already present)
        #[arg(long)]
        append: bool,
    },

    /// Print forecast metrics for the master dataset as JSON
    Forecast {
        /// Master dataset file
        #[arg(long, default_value = DEFAULT_MASTER)]
        master: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Consolidate {
            input,
            output,
            append,
        } => run_consolidate(&input, &output, append),
        Command::Forecast { master } => run_forecast(&master),
    }
}

fn run_consolidate(input: &Path, output: &Path, append: bool) -> Result<()> {
    if !input.exists() {
        bail!("input file not found: {}", input.display());
    }

    let text =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let export = spendpace_ingest::parse_export_text(&text)
        .with_context(|| format!("parsing {}", input.display()))?;

    if export.records.is_empty() {
        println!("No valid data processed");
        if !export.dropped.is_empty() {
            report::print_report(&export, output, append, 0);
        }
        std::process::exit(1);
    }

    let replaced = spendpace_core::dataset::consolidate(&export.records, output, append)?;
    report::print_report(&export, output, append, replaced);
    Ok(())
}

fn run_forecast(master: &Path) -> Result<()> {
    if !master.exists() {
        println!("{}", json!({ "error": "master dataset not found" }));
        std::process::exit(1);
    }

    let records = match spendpace_core::dataset::load(master) {
        Ok(records) => records,
        Err(err) => {
            println!("{}", json!({ "error": format!("failed reading master dataset: {err:#}") }));
            std::process::exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();
    match spendpace_core::forecast(&records, today) {
        Ok(Some(report)) => println!("{}", serde_json::to_string(&report)?),
        // Empty dataset is not a failure; callers get an error-shaped
        // payload but a zero exit.
        Ok(None) => println!("{}", json!({ "error": "no entries parsed" })),
        Err(err) => {
            println!("{}", json!({ "error": format!("failed reading master dataset: {err:#}") }));
            std::process::exit(1);
        }
    }

    Ok(())
}
