// SPDX-License-Identifier: MIT
//! Bigzip command line tool

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bigzip::config::DEFAULT_FACTOR;
use bigzip::{compress_file, restore_file, Config};

#[derive(Parser)]
#[command(name = "bz")]
#[command(about = "Inflate a file to a target size, or restore the original", long_about = None)]
struct Cli {
    /// Input file path
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Input file path, when --input is not given
    #[arg(value_name = "INPUT", conflicts_with = "input")]
    positional_input: Option<PathBuf>,

    /// Output file path (defaults to <name>.bigzip next to the input)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Size multiplier, at least 1.0
    #[arg(short, long, default_value_t = DEFAULT_FACTOR)]
    factor: f64,

    /// Inflation mode: repeat|zero|random
    #[arg(short, long, default_value = "repeat")]
    mode: String,

    /// Restore a .bigzip file to its original content
    #[arg(short = 'u', long, visible_alias = "uz")]
    unbigzip: bool,

    /// Allow overwriting existing output files
    #[arg(long)]
    force: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            input: self.input.or(self.positional_input).unwrap_or_default(),
            output: self.output,
            factor: self.factor,
            mode: self.mode,
            restore: self.unbigzip,
            force: self.force,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.into_config();

    if config.restore {
        let report = restore_file(&config)
            .with_context(|| format!("unbigzip error for {:?}", config.input))?;
        println!(
            "Restored original to {} (mode: {})",
            report.output.display(),
            report.mode
        );
        if report.is_truncated() {
            eprintln!(
                "warning: container is truncated, restored {} of {} bytes",
                report.restored_size, report.declared_size
            );
        }
    } else {
        let report = compress_file(&config)
            .with_context(|| format!("failed to inflate {:?}", config.input))?;
        println!(
            "Wrote {} (size: {} bytes)",
            report.output.display(),
            report.total_size
        );
    }

    Ok(())
}
