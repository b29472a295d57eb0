use anyhow::{Context, Result};
use clap::Parser;
use oc2otel::pipeline::{self, Paths};
use oc2otel_config::{FormatSetting, RuntimeConfig};
use std::path::PathBuf;

/// Translate OpenCensus metrics batches into the canonical metrics model
#[derive(Parser)]
#[command(name = "oc2otel")]
#[command(version)]
#[command(about = "Translate OpenCensus metrics batches into the canonical metrics model", long_about = None)]
struct Cli {
    /// Input payload (stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Write translated metrics here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Input format: auto, protobuf, json, jsonl (overrides config file)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<FormatSetting>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'v', long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Step 1: Load base configuration
    let mut config = if let Some(config_path) = &cli.config {
        RuntimeConfig::load_from_path(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        RuntimeConfig::load().context("Failed to load configuration")?
    };

    // Step 2: Apply CLI overrides (highest priority)
    apply_cli_overrides(&mut config, &cli);

    // Step 3: Logs go to stderr so stdout stays clean; validate once they are live
    oc2otel::init_runtime(&config)?;

    pipeline::run(
        &config,
        Paths {
            input: cli.input.as_deref(),
            output: cli.output.as_deref(),
        },
    )?;
    Ok(())
}

fn apply_cli_overrides(config: &mut RuntimeConfig, cli: &Cli) {
    if let Some(format) = cli.format {
        config.input.format = format;
    }

    if cli.pretty {
        config.output.pretty = true;
    }

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
}
