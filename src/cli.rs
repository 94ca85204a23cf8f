//! Command-line interface components.

use crate::config::{LineEnding, LoaderConfig};
use crate::constants::LOG_TARGET;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::models::CrimeRecord;
use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "crime-loader")]
#[command(about = "Load comma separated Chicago crime data into typed records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the crime dataset text file
    #[arg(value_name = "DATASET_PATH")]
    pub dataset_path: PathBuf,

    /// JSON loader configuration file; flags below override it
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Accept lines whose field count is any multiple of 18, reading only the first 18
    #[arg(long)]
    pub lenient: bool,

    /// Line separator policy
    #[arg(long, value_enum)]
    pub line_ending: Option<LineEnding>,

    /// Field delimiter
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Number of records to print
    #[arg(long, default_value_t = 5)]
    pub limit: usize,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// How loaded records are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the loader configuration: config file first, then flag overrides
    pub fn loader_config(&self) -> Result<LoaderConfig> {
        let mut config = match &self.config {
            Some(path) => LoaderConfig::from_json_file(path)?,
            None => LoaderConfig::default(),
        };

        if self.lenient {
            config = config.lenient();
        }
        if let Some(line_ending) = self.line_ending {
            config = config.with_line_ending(line_ending);
        }
        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter);
        }

        config.validate()?;
        debug!("Using loader config: {:?}", config);
        Ok(config)
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Print a human readable summary of the loaded dataset
pub fn print_summary(dataset: &Dataset, args: &Args) {
    let stats = dataset.last_stats();

    println!("{}", "Crime dataset loaded".bright_green().bold());
    println!(
        "  {} {}",
        "Source:".bright_cyan(),
        args.dataset_path.display()
    );
    println!(
        "  {} {}",
        "Records:".bright_cyan(),
        stats.records_loaded.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Defaulted numeric fields:".bright_cyan(),
        stats.fields_defaulted.to_string().bright_white()
    );
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );

    let located = dataset.iter().filter(|r| r.has_location()).count();
    let arrests = dataset
        .iter()
        .filter(|r| r.arrest_flag() == Some(true))
        .count();
    println!(
        "  {} {}",
        "With coordinates:".bright_cyan(),
        located.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Arrests made:".bright_cyan(),
        arrests.to_string().bright_white()
    );

    if dataset.is_empty() || args.limit == 0 {
        return;
    }

    println!();
    for record in dataset.iter().take(args.limit) {
        println!("  {}", format_record(record));
    }
    if dataset.len() > args.limit {
        println!(
            "  {}",
            format!("... {} more", dataset.len() - args.limit).bright_black()
        );
    }
}

fn format_record(record: &CrimeRecord) -> String {
    let occurred = record
        .occurred_at()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| record.date_of_occurrence.clone());

    format!(
        "{} {} {} / {} @ {} ({:.5}, {:.5})",
        record.case_no.bright_yellow(),
        occurred,
        record.primary_description,
        record.secondary_description,
        record.block_address,
        record.latitude,
        record.longitude
    )
}

/// Serialise up to `limit` records as a JSON array
pub fn records_json(dataset: &Dataset, limit: usize) -> serde_json::Result<String> {
    let records: Vec<&CrimeRecord> = dataset.iter().take(limit).collect();
    serde_json::to_string_pretty(&records)
}
