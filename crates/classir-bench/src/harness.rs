//! Timing harness: verifies each IR program against its native twin, then
//! times both over a fixed number of invocations.

use std::hint::black_box;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use classir_core::{Error, HarnessConfig, OutputFormat, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::programs::{self, Benchmark, ProgramFn};

/// Timing result for one benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub benchmark: String,
    pub iterations: u64,
    pub input: (i32, i32),
    pub ir_ms: f64,
    pub native_ms: f64,
    /// `ir_ms / native_ms`, absent when the native loop was too fast to measure
    pub overhead_ratio: Option<f64>,
    pub started_at: DateTime<Utc>,
}

impl BenchReport {
    pub fn new(
        bench: &Benchmark,
        iterations: u64,
        ir: Duration,
        native: Duration,
        started_at: DateTime<Utc>,
    ) -> Self {
        let ir_ms = ir.as_secs_f64() * 1000.0;
        let native_ms = native.as_secs_f64() * 1000.0;
        let overhead_ratio = (native_ms > 0.0).then(|| ir_ms / native_ms);
        Self {
            benchmark: bench.name.to_string(),
            iterations,
            input: bench.input,
            ir_ms,
            native_ms,
            overhead_ratio,
            started_at,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let ratio = self
                    .overhead_ratio
                    .map(|r| format!("{:.3}", r))
                    .unwrap_or_else(|| "n/a".to_string());
                Ok(format!(
                    "{}: time (ms): ir={:.3} native={:.3} ratio={}",
                    self.benchmark, self.ir_ms, self.native_ms, ratio
                ))
            }
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

fn invoke(program: ProgramFn, input: (i32, i32)) -> (i32, i32) {
    let (mut x, mut y) = input;
    program(&mut x, &mut y);
    (x, y)
}

/// Run the IR and native programs on `samples` random inputs drawn from the
/// benchmark's ranges and fail on the first disagreement
pub fn verify(bench: &Benchmark, samples: usize, rng: &mut ChaCha8Rng) -> Result<()> {
    let fixed = std::iter::once(bench.input);
    let random = (0..samples).map(|_| {
        (
            rng.gen_range(bench.x_range.clone()),
            rng.gen_range(bench.y_range.clone()),
        )
    });
    // Collected first so the rng sequence does not depend on program results
    let inputs: Vec<(i32, i32)> = fixed.chain(random).collect();

    for input in inputs {
        let ir = invoke(bench.ir, input);
        let native = invoke(bench.native, input);
        if ir != native {
            warn!(
                benchmark = bench.name,
                ?input,
                ?ir,
                ?native,
                "IR and native results diverge"
            );
            return Err(Error::Validation(format!(
                "{}: input {:?} gave {:?} from IR but {:?} natively",
                bench.name, input, ir, native
            )));
        }
    }

    debug!(benchmark = bench.name, samples, "Verified IR against native");
    Ok(())
}

/// Wall-clock time of `iterations` invocations of `program`, after `warmup`
/// untimed ones
pub fn time(program: ProgramFn, input: (i32, i32), iterations: u64, warmup: u64) -> Duration {
    for _ in 0..warmup {
        black_box(invoke(program, black_box(input)));
    }

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(invoke(program, black_box(input)));
    }
    start.elapsed()
}

/// Benchmarks selected by `config`, in catalog order. Unknown names are an error.
pub fn select(config: &HarnessConfig) -> Result<Vec<&'static Benchmark>> {
    for name in &config.benchmarks {
        programs::find(name)?;
    }
    Ok(programs::catalog()
        .iter()
        .filter(|b| config.selects(b.name))
        .collect())
}

pub fn run_one(bench: &Benchmark, config: &HarnessConfig, rng: &mut ChaCha8Rng) -> Result<BenchReport> {
    verify(bench, config.verify_samples, rng)?;

    let started_at = Utc::now();
    let ir = time(bench.ir, bench.input, config.iterations, config.warmup_iterations);
    let native = time(bench.native, bench.input, config.iterations, config.warmup_iterations);
    let report = BenchReport::new(bench, config.iterations, ir, native, started_at);

    info!(
        benchmark = bench.name,
        ir_ms = report.ir_ms,
        native_ms = report.native_ms,
        ratio = ?report.overhead_ratio,
        "Benchmark finished"
    );
    Ok(report)
}

pub fn run(config: &HarnessConfig) -> Result<Vec<BenchReport>> {
    config.validate()?;
    let selected = select(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    info!(
        benchmarks = selected.len(),
        iterations = config.iterations,
        "Running benchmarks"
    );

    selected
        .into_iter()
        .map(|bench| run_one(bench, config, &mut rng))
        .collect()
}
