//! Wall-clock timing of maze generation across sizes and parameters.

use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

use crate::error::MazeError;
use crate::generator::Generator;

const SIZES: [usize; 5] = [5, 10, 25, 50, 100];
const SENSITIVITY_SIZE: usize = 50;
const BETAS: [f64; 5] = [0.0, 0.4, 0.8, 1.2, 1.6];
const BRAID_PROBABILITIES: [f64; 5] = [0.0, 0.05, 0.10, 0.15, 0.20];
const DEFAULT_ITERATIONS: usize = 5;
const WARMUP_ITERATIONS: u64 = 3;
const HISTORY_WINDOW: usize = 50;
const BETA: f64 = 0.8;
const BRAID_PROBABILITY: f64 = 0.08;

#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub width: usize,
    pub height: usize,
    pub time_ms: f64,
}

impl BenchmarkResult {
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Microseconds per maze cell.
    pub fn time_per_cell(&self) -> f64 {
        self.time_ms * 1000.0 / self.cell_count() as f64
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}x{}: {:.3} ms]", self.width, self.height, self.time_ms)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerformanceMetrics {
    pub average_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    /// Population standard deviation.
    pub std_dev_ms: f64,
    pub median_ms: f64,
}

impl PerformanceMetrics {
    pub fn compute(results: &[BenchmarkResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }
        let mut times: Vec<f64> = results.iter().map(|r| r.time_ms).collect();
        let n = times.len() as f64;
        let average_ms = times.iter().sum::<f64>() / n;
        let variance = times.iter().map(|t| (t - average_ms).powi(2)).sum::<f64>() / n;

        times.sort_by(f64::total_cmp);
        let mid = times.len() / 2;
        let median_ms = if times.len() % 2 == 0 {
            (times[mid - 1] + times[mid]) / 2.0
        } else {
            times[mid]
        };

        Self {
            average_ms,
            min_ms: times[0],
            max_ms: times[times.len() - 1],
            std_dev_ms: variance.sqrt(),
            median_ms,
        }
    }
}

impl fmt::Display for PerformanceMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg={:.3} ms, min={:.3} ms, max={:.3} ms, stddev={:.3} ms",
            self.average_ms, self.min_ms, self.max_ms, self.std_dev_ms
        )
    }
}

/// Iterations per measurement, overridable through `ANTIDFS_BENCH_ITERATIONS`.
pub fn iterations() -> usize {
    std::env::var("ANTIDFS_BENCH_ITERATIONS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_ITERATIONS)
}

/// Times one `generate(0, 0)` run. Construction is not timed.
pub fn time_generation(
    width: usize,
    height: usize,
    seed: u64,
    beta: f64,
    braid_probability: f64,
) -> Result<BenchmarkResult, MazeError> {
    let mut generator = Generator::new(width, height, seed, HISTORY_WINDOW, beta, braid_probability)?;
    let started = Instant::now();
    generator.generate(0, 0)?;
    let time_ms = started.elapsed().as_secs_f64() * 1000.0;
    Ok(BenchmarkResult { width, height, time_ms })
}

fn warmup(size: usize) -> Result<(), MazeError> {
    for seed in 0..WARMUP_ITERATIONS {
        time_generation(size, size, seed, BETA, BRAID_PROBABILITY)?;
    }
    Ok(())
}

fn measure(
    size: usize,
    iterations: usize,
    beta: f64,
    braid_probability: f64,
) -> Result<PerformanceMetrics, MazeError> {
    warmup(size)?;
    let results = (0..iterations as u64)
        .map(|seed| time_generation(size, size, seed, beta, braid_probability))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PerformanceMetrics::compute(&results))
}

pub fn run_size_benchmark<W: Write>(out: &mut W, iterations: usize) -> Result<(), MazeError> {
    writeln!(out, "Size Benchmark (default parameters):")?;
    writeln!(
        out,
        "{:<12} {:<15} {:<15} {:<15} {:<15}",
        "Size", "Avg (ms)", "Min (ms)", "Max (ms)", "StdDev (ms)"
    )?;
    writeln!(out, "{}", "-".repeat(72))?;
    for size in SIZES {
        let m = measure(size, iterations, BETA, BRAID_PROBABILITY)?;
        writeln!(
            out,
            "{:<12} {:<15.3} {:<15.3} {:<15.3} {:<15.3}",
            format!("{size}×{size}"),
            m.average_ms,
            m.min_ms,
            m.max_ms,
            m.std_dev_ms
        )?;
    }
    Ok(())
}

pub fn run_parameter_sensitivity<W: Write>(out: &mut W, iterations: usize) -> Result<(), MazeError> {
    let size = SENSITIVITY_SIZE;
    writeln!(out, "Parameter Sensitivity ({size}×{size} maze):")?;
    writeln!(out)?;

    writeln!(out, "Anti-Persistence (β) Impact:")?;
    sensitivity_header(out, "Beta")?;
    for beta in BETAS {
        let m = measure(size, iterations, beta, BRAID_PROBABILITY)?;
        writeln!(out, "{:<10.1} {:<15.3} {:<15.3}", beta, m.average_ms, m.std_dev_ms)?;
    }
    writeln!(out)?;

    writeln!(out, "Braiding Probability Impact:")?;
    sensitivity_header(out, "Braid p")?;
    for p in BRAID_PROBABILITIES {
        let m = measure(size, iterations, BETA, p)?;
        writeln!(out, "{:<10.2} {:<15.3} {:<15.3}", p, m.average_ms, m.std_dev_ms)?;
    }
    Ok(())
}

fn sensitivity_header<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "{:<10} {:<15} {:<15}", label, "Avg (ms)", "StdDev (ms)")?;
    writeln!(out, "{}", "-".repeat(40))
}

pub fn run_full_suite<W: Write>(out: &mut W) -> Result<(), MazeError> {
    let iterations = iterations();
    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(out, "  BENCHMARK SUITE: antidfs maze generator")?;
    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(out)?;
    run_size_benchmark(out, iterations)?;
    writeln!(out)?;
    run_parameter_sensitivity(out, iterations)
}
