//! Knowhere CLI
//!
//! Command-line interface for running the closures playground scenario and
//! trying the tracker and list operations on ad-hoc input.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use knowhere::scenario::{run_pipeline, track_values};
use knowhere::{ReportFormat, run_scenario};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "knowhere")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Knowhere - closures and higher-order functions playground", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the playground scenario and print the report
    Run {
        /// Scenario TOML merged over the built-in defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Human)]
        format: ReportFormat,
    },

    /// Grow a population tracker and print every running total
    Track {
        /// Initial population
        #[arg(allow_negative_numbers = true)]
        initial: i64,

        /// Growth applied on each call, in order
        #[arg(allow_negative_numbers = true)]
        growth: Vec<i64>,
    },

    /// Sort, map, filter and reduce a list of integers
    Pipeline {
        /// Input values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Map step: multiply each value by this
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        multiplier: i64,

        /// Filter step: keep mapped values strictly above this
        #[arg(short, long, default_value_t = 4000, allow_negative_numbers = true)]
        threshold: i64,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { config, format } => {
            run_report(config.as_deref(), format);
        }
        Commands::Track { initial, growth } => {
            run_track(initial, &growth);
        }
        Commands::Pipeline {
            values,
            multiplier,
            threshold,
        } => {
            print_pipeline(values, multiplier, threshold);
        }
        Commands::Completions { shell } => {
            run_completions(shell);
        }
    }
}

/// Log to stderr so reports on stdout stay clean
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "knowhere", &mut io::stdout());
}

fn run_report(config: Option<&Path>, format: ReportFormat) {
    let report = match run_scenario(config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match report.render(format) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_track(initial: i64, growth: &[i64]) {
    for value in track_values(initial, growth) {
        println!("{}", value);
    }
}

fn print_pipeline(values: Vec<i64>, multiplier: i64, threshold: i64) {
    let outcome = run_pipeline(values, multiplier, threshold);
    println!("sorted: {:?}", outcome.sorted);
    println!("mapped: {:?}", outcome.mapped);
    println!("filtered: {:?}", outcome.filtered);
    println!("reduced: {}", outcome.reduced);
}
