//! Extrema CLI - command-line front end for the min/max benchmarks
//!
//! Two commands are provided:
//! - `search`: runs both strategies once over a prefix of the samples
//! - `sweep`: times both strategies across increasing prefix sizes
//!
//! Samples come from a CSV or xlsx table when one is configured, otherwise they are
//! generated from the `[samples]` section of the configuration.

pub mod output;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use extrema_benchmark::{compare_prefix, Benchmark, BenchmarkConfig, BenchmarkResult};
use extrema_core::Sample;
use extrema_config::ExtremaConfig;
use extrema_data::{category_extrema, Dataset, SampleGenerator};
use tracing::{info, Level};

pub use output::OutputFormat;

/// Name given to sweeps started from the command line.
const SWEEP_NAME: &str = "Min/Max Sweep";

/// Iterative vs recursive min/max search benchmarks
#[derive(Parser, Debug)]
#[command(name = "extrema", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (`.toml`, `.yaml` or `.yml`)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable console logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log every measured size
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Console log level, or `None` when logging is disabled.
    pub fn log_level(&self) -> Option<Level> {
        if self.quiet {
            None
        } else if self.verbose {
            Some(Level::DEBUG)
        } else {
            Some(Level::INFO)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the minimum and maximum of a prefix with both strategies
    Search(SearchArgs),

    /// Time both strategies across increasing input sizes
    Sweep(SweepArgs),
}

/// Arguments of `extrema search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// CSV or xlsx table to read instead of synthetic samples
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of leading values to search
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Largest size at which the recursive search still runs
    #[arg(long)]
    pub recursion_ceiling: Option<usize>,

    /// Run the recursive search at any size
    #[arg(long, conflicts_with = "recursion_ceiling")]
    pub no_ceiling: bool,

    /// Seed for synthetic samples
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (markdown or json)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
}

/// Arguments of `extrema sweep`.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// CSV or xlsx table to read instead of synthetic samples
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Largest prefix size to measure
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Distance between measured sizes
    #[arg(long)]
    pub step: Option<usize>,

    /// Timed runs averaged per size
    #[arg(short, long)]
    pub repeat: Option<usize>,

    /// Largest size at which the recursive search is measured
    #[arg(long)]
    pub recursion_ceiling: Option<usize>,

    /// Measure the recursive search at every size
    #[arg(long, conflicts_with = "recursion_ceiling")]
    pub no_ceiling: bool,

    /// Seed for synthetic samples
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs a parsed command line and returns the text to print.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid, the
/// input table cannot be read, or the benchmark rejects its parameters.
pub fn execute(cli: &Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref())?;
    match &cli.command {
        Commands::Search(args) => search(config, args),
        Commands::Sweep(args) => sweep(config, args),
    }
}

fn load_config(path: Option<&Path>) -> Result<ExtremaConfig> {
    match path {
        Some(path) => ExtremaConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ExtremaConfig::new()),
    }
}

fn load_dataset(path: &Path, config: &ExtremaConfig) -> Result<Dataset> {
    Dataset::load(path, &config.dataset)
        .with_context(|| format!("failed to read samples from {}", path.display()))
}

fn search(mut config: ExtremaConfig, args: &SearchArgs) -> Result<String> {
    if let Some(input) = &args.input {
        config.dataset.path = Some(input.clone());
    }
    if let Some(size) = args.size {
        config.search.size = size;
    }
    if args.no_ceiling {
        config.search.recursion_ceiling = None;
    } else if let Some(ceiling) = args.recursion_ceiling {
        config.search.recursion_ceiling = Some(ceiling);
    }
    if let Some(seed) = args.seed {
        config.samples.seed = Some(seed);
    }
    config.validate().context("invalid configuration")?;
    args.format.ensure_search()?;

    let ceiling = config.search.recursion_ceiling;
    match config.dataset.path.clone() {
        Some(path) => {
            let dataset = load_dataset(&path, &config)?;
            // An explicit size must fit the table; the configured one is clamped.
            let size = match args.size {
                Some(size) => size,
                None => config.search.size.min(dataset.len()),
            };
            let comparison = compare_prefix(&dataset.values(), size, ceiling)?;
            let categories = category_extrema(&dataset.records()[..size]);
            output::render_search(&comparison, &categories, args.format)
        }
        None => {
            let size = config.search.size;
            let samples = SampleGenerator::from_config(&config.samples)?.generate(size);
            let comparison = compare_prefix(&samples, size, ceiling)?;
            output::render_search(&comparison, &[], args.format)
        }
    }
}

fn sweep(mut config: ExtremaConfig, args: &SweepArgs) -> Result<String> {
    if let Some(input) = &args.input {
        config.dataset.path = Some(input.clone());
    }
    if let Some(max_size) = args.max_size {
        config.sweep.max_size = max_size;
    }
    if let Some(step) = args.step {
        config.sweep.step = step;
    }
    if let Some(repeat) = args.repeat {
        config.sweep.repeat_count = repeat;
    }
    if args.no_ceiling {
        config.sweep.recursion_ceiling = None;
    } else if let Some(ceiling) = args.recursion_ceiling {
        config.sweep.recursion_ceiling = Some(ceiling);
    }
    if let Some(seed) = args.seed {
        config.samples.seed = Some(seed);
    }
    config.validate().context("invalid configuration")?;

    let result = match config.dataset.path.clone() {
        Some(path) => {
            let dataset = load_dataset(&path, &config)?;
            if args.max_size.is_none() {
                config.sweep.max_size = config.sweep.max_size.min(dataset.len());
            }
            run_sweep(&dataset.values(), &config, args)?
        }
        None => {
            let samples =
                SampleGenerator::from_config(&config.samples)?.generate(config.sweep.max_size);
            run_sweep(&samples, &config, args)?
        }
    };

    let Some(path) = &args.output else {
        return output::render_sweep(&result, args.format);
    };
    // CSV and Markdown files are written by the benchmark itself.
    if args.format == OutputFormat::Json {
        fs::write(path, output::render_sweep(&result, args.format)?)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        let shown = path.display().to_string();
        info!(
            event = "report_written",
            format = args.format.as_str(),
            path = shown.as_str(),
        );
    }
    Ok(format!("Report written to {}\n", path.display()))
}

fn run_sweep<T: Sample>(
    samples: &[T],
    config: &ExtremaConfig,
    args: &SweepArgs,
) -> Result<BenchmarkResult> {
    let mut bench_config = BenchmarkConfig::from_sweep(SWEEP_NAME, &config.sweep);
    if let Some(path) = &args.output {
        let path = path.to_string_lossy();
        bench_config = match args.format {
            OutputFormat::Csv => bench_config.with_csv_output(path),
            OutputFormat::Markdown => bench_config.with_markdown_output(path),
            OutputFormat::Json => bench_config,
        };
    }

    Benchmark::new(bench_config)
        .run_and_export(samples)
        .context("sweep failed")
}
