//! Times class IR programs against native Rust versions of the same programs.
//!
//! Usage: `classir-bench [BENCHMARK...] [--config FILE] [--iterations N] [--format text|json]`

mod telemetry;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use classir_bench::{catalog, run};
use classir_core::{HarnessConfig, OutputFormat};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "classir-bench")]
#[command(about = "Measure the overhead of class IR programs relative to native code")]
struct Args {
    /// Benchmarks to run (default: the whole catalog)
    benchmarks: Vec<String>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Timed invocations per program
    #[arg(long, short = 'n')]
    iterations: Option<u64>,

    /// Untimed invocations before timing starts
    #[arg(long)]
    warmup: Option<u64>,

    /// Seed for verification inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Random inputs checked against the native program before timing
    #[arg(long)]
    verify_samples: Option<usize>,

    /// Report format (text or json)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// List available benchmarks and exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn into_config(self) -> Result<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => HarnessConfig::default(),
        };

        if !self.benchmarks.is_empty() {
            config.benchmarks = self.benchmarks;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(warmup) = self.warmup {
            config.warmup_iterations = warmup;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(samples) = self.verify_samples {
            config.verify_samples = samples;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.log_json |= self.log_json;

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        for bench in catalog() {
            println!("{:<14} {}", bench.name, bench.description);
        }
        return Ok(());
    }

    let config = args.into_config()?;

    telemetry::init_telemetry(config.log_json)?;

    info!("Starting class IR timing harness");
    debug!(?config, "Loaded configuration");

    let reports = run(&config)?;
    for report in &reports {
        println!("{}", report.render(config.format)?);
    }

    info!(benchmarks = reports.len(), "Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "classir-bench",
            "gcd",
            "--iterations",
            "5",
            "--format",
            "json",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.benchmarks, vec!["gcd".to_string()]);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.warmup_iterations, 1024);
    }

    #[test]
    fn test_zero_iterations_flag_rejected() {
        let args = Args::parse_from(["classir-bench", "-n", "0"]);
        assert!(args.into_config().is_err());
    }
}
