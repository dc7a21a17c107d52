use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use timing_report::{
    cli::Cli,
    config::ReportConfig,
    generator::{self, GeneratorConfig},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load the config file (if any) and apply command-line overrides on top
fn resolve_config(args: &Cli) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if !args.timings.is_empty() {
        config.timings = args.timings.clone();
    }
    if let Some(unit) = &args.time_unit {
        config.time_unit = unit.clone();
    }
    if let Some(encoding) = &args.input_encoding {
        config.input_encoding = encoding.clone();
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if args.output.is_some() {
        config.output = args.output.clone();
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = resolve_config(&args)?;
    if let Some(path) = config.output.as_ref().filter(|path| path.is_dir()) {
        anyhow::bail!("Invalid value for --output: {} is a directory", path.display());
    }
    let generator_config = GeneratorConfig::from_report_config(&config)?;

    let rendered = generator::generate(&generator_config)?;

    match &config.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None if rendered.ends_with('\n') => print!("{}", rendered),
        None => println!("{}", rendered),
    }

    Ok(())
}
