//! Configuration types for the timing harness.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How benchmark reports are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Validation(format!("Unknown output format '{}'", other))),
        }
    }
}

/// Harness run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Timed invocations of each program
    pub iterations: u64,
    /// Untimed invocations before the clock starts
    pub warmup_iterations: u64,
    /// Seed for the verification input generator
    pub seed: u64,
    /// Random inputs on which IR and native results must agree
    pub verify_samples: usize,
    /// Benchmarks to run; empty selects the whole catalog
    pub benchmarks: Vec<String>,
    /// Report rendering
    pub format: OutputFormat,
    /// Emit logs as JSON instead of the human-readable format
    pub log_json: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: 1024 * 16,
            warmup_iterations: 1024,
            seed: 0,
            verify_samples: 64,
            benchmarks: Vec::new(),
            format: OutputFormat::Text,
            log_json: false,
        }
    }
}

impl HarnessConfig {
    /// Load a configuration file; fields missing from the file keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: HarnessConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::Validation("iterations must be at least 1".to_string()));
        }
        if self.benchmarks.iter().any(|name| name.trim().is_empty()) {
            return Err(Error::Validation("benchmark names must not be empty".to_string()));
        }
        Ok(())
    }

    /// Whether `name` is selected by this configuration
    pub fn selects(&self, name: &str) -> bool {
        self.benchmarks.is_empty() || self.benchmarks.iter().any(|b| b == name)
    }
}
