use anyhow::Context;
use clap::Parser;
use crime_loader::Dataset;
use crime_loader::cli::{self, Args, OutputFormat};
use std::process;

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);

    if let Err(error) = run(&args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args
        .loader_config()
        .context("Failed to build loader configuration")?;

    let mut dataset = Dataset::new(config);
    dataset
        .reload_from_path(&args.dataset_path)
        .with_context(|| format!("Failed to load {}", args.dataset_path.display()))?;

    match args.format {
        OutputFormat::Summary => cli::print_summary(&dataset, args),
        OutputFormat::Json => {
            let json = cli::records_json(&dataset, args.limit)
                .context("Failed to serialise records")?;
            println!("{}", json);
        }
    }

    Ok(())
}
