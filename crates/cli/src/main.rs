//! Page replacement simulator CLI.
//!
//! This binary is the input boundary and presentation layer for `pagesim-core`. It performs:
//! 1. **Compare:** Run FIFO, LRU and Optimal over one reference string and print the summary
//!    and the side-by-side step table.
//! 2. **Run:** Run a single algorithm.
//! 3. **Random:** Print a generated reference string.
//!
//! Reference strings are given as comma separated text (`--pages "7,0,1,2"`) or generated with
//! `--random`. Settings come from built-in defaults, an optional JSON file (`--config`), and
//! finally command-line flags.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use pagesim_core::config::{Config, OutputFormat};
use pagesim_core::sim::input::format_reference_string;
use pagesim_core::sim::{ReferenceGenerator, parse_frame_count, parse_reference_string};
use pagesim_core::{Algorithm, SimError, compare, run};

mod report;

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "FIFO / LRU / Optimal page replacement simulator",
    long_about = "Replay a page reference string against a fixed number of frames and compare replacement algorithms step by step.\n\nExamples:\n  pagesim compare --pages \"1,2,3,4,1,2,5,1,2,3,4,5\" --frames 3\n  pagesim compare --random --seed 7 --json\n  pagesim run --algorithm lru --pages \"7,0,1,2,0,3\" --frames 2\n  pagesim random --seed 42"
)]
struct Cli {
    /// JSON configuration file; command-line flags override its values.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run FIFO, LRU and Optimal over the same reference string.
    Compare {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run a single algorithm.
    Run {
        /// Algorithm to run (fifo, lru, optimal).
        #[arg(short, long)]
        algorithm: Algorithm,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print a random reference string.
    Random {
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Comma separated page references, e.g. "7, 0, 1, 2".
    #[arg(short, long, conflicts_with = "random")]
    pages: Option<String>,

    /// Generate a random reference string instead of --pages.
    #[arg(long)]
    random: bool,

    /// Seed for --random.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Number of memory frames (defaults to the configured value).
    #[arg(short, long)]
    frames: Option<String>,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Skip the step-by-step table.
    #[arg(long)]
    no_steps: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = dispatch(cli) {
        error!(error = %err, "pagesim failed");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v` flags.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Compare { input, output } => cmd_compare(&config, &input, &output),
        Commands::Run {
            algorithm,
            input,
            output,
        } => cmd_run(&config, algorithm, &input, &output),
        Commands::Random { seed } => {
            let pages = generate(&config, seed)?;
            println!("{}", format_reference_string(&pages));
            Ok(())
        }
    }
}

/// Resolves the reference string and frame count from flags and configuration.
fn resolve_input(config: &Config, input: &InputArgs) -> Result<(Vec<u64>, usize), SimError> {
    let pages = match (&input.pages, input.random) {
        (_, true) => generate(config, input.seed)?,
        (Some(text), false) => parse_reference_string(text)?,
        (None, false) => {
            return Err(SimError::invalid_input(
                "no reference string given; pass --pages or --random",
            ));
        }
    };
    let frames = match &input.frames {
        Some(text) => parse_frame_count(text)?,
        None => config.frames,
    };
    Ok((pages, frames))
}

fn generate(config: &Config, seed: Option<u64>) -> Result<Vec<u64>, SimError> {
    let mut generator = match seed {
        Some(seed) => ReferenceGenerator::with_seed(config.generator.clone(), seed)?,
        None => ReferenceGenerator::new(config.generator.clone())?,
    };
    Ok(generator.generate())
}

/// Merges output flags over the configured output settings.
fn resolve_output(config: &Config, output: &OutputArgs) -> (OutputFormat, bool) {
    let format = if output.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    (format, config.output.show_steps && !output.no_steps)
}

fn cmd_compare(
    config: &Config,
    input: &InputArgs,
    output: &OutputArgs,
) -> Result<(), Box<dyn Error>> {
    let (pages, frames) = resolve_input(config, input)?;
    let result = compare(&pages, frames)?;

    let mut out = io::stdout().lock();
    match resolve_output(config, output) {
        (OutputFormat::Json, _) => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
        (OutputFormat::Table, show_steps) => {
            report::write_comparison(&mut out, &result)?;
            if show_steps {
                report::write_step_table(&mut out, &result)?;
            }
        }
    }
    Ok(())
}

fn cmd_run(
    config: &Config,
    algorithm: Algorithm,
    input: &InputArgs,
    output: &OutputArgs,
) -> Result<(), Box<dyn Error>> {
    let (pages, frames) = resolve_input(config, input)?;
    let result = run(algorithm, &pages, frames)?;

    let mut out = io::stdout().lock();
    match resolve_output(config, output) {
        (OutputFormat::Json, _) => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
        (OutputFormat::Table, show_steps) => {
            report::write_run(&mut out, &pages, &result)?;
            if show_steps {
                report::write_run_steps(&mut out, &result)?;
            }
        }
    }
    Ok(())
}
