//! CLI for searching self-descriptive sentences.
//!
//! # Usage
//!
//! ```bash
//! # Search the built-in pairs
//! cargo run -p ag-search --bin autogram
//!
//! # Search a chosen pair, reproducibly
//! cargo run -p ag-search --bin autogram -- --pair "this sentence has|and" --seed 42
//!
//! # Give up after a budget, print JSON
//! cargo run -p ag-search --bin autogram -- --max-steps 10000000 --json
//! ```

use std::process::ExitCode;

use ag_core::PropertySummary;
use ag_search::{run_all, RunConfig, SearchConfig, SearchError, SentencePair, SentenceReport};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "autogram", version, about = "Search for self-descriptive sentences")]
struct Args {
    /// Sentence pair as "PREFIX|CONNECTOR" (repeatable; defaults to the built-in pairs)
    #[arg(long = "pair", value_name = "PREFIX|CONNECTOR")]
    pairs: Vec<SentencePair>,

    /// Master seed (falls back to AUTOGRAM_SEED, then a random seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Give up on a pair after this many steps
    #[arg(long)]
    max_steps: Option<u64>,

    /// Give up on a pair after this many restarts
    #[arg(long)]
    max_restarts: Option<u64>,

    /// Maximum searches running at once (defaults to the number of CPUs)
    #[arg(long)]
    jobs: Option<usize>,

    /// Print reports as JSON lines
    #[arg(long)]
    json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_steps: self.max_steps,
            max_restarts: self.max_restarts,
            ..SearchConfig::default()
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_outcome(json: bool, outcome: &Result<SentenceReport, SearchError>) -> bool {
    let report = match outcome {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return false;
        }
    };

    let summary: PropertySummary = report.verify();
    if json {
        match report.to_json() {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Failed to encode report: {}", e);
                return false;
            }
        }
    } else {
        println!("{}", report.format_summary());
        println!("{}", summary.format_report());
    }
    summary.failed == 0
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level());

    let seed = match ag_rng::resolve_seed(args.seed) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pairs = if args.pairs.is_empty() {
        SentencePair::defaults()
    } else {
        args.pairs.clone()
    };

    let mut config = RunConfig::new(seed).with_search(args.search_config());
    config.jobs = args.jobs;

    if !args.json {
        println!("Searching for self-referential sentences ...");
        println!();
    }

    let json = args.json;
    let mut all_verified = true;
    let outcomes = run_all(pairs, config, |_, outcome| {
        all_verified &= print_outcome(json, outcome);
    })
    .await;

    let found = outcomes.iter().filter(|o| o.is_ok()).count();
    tracing::info!(found, total = outcomes.len(), seed, "all searches finished");

    if !json {
        println!("Program done!");
    }

    if all_verified && found == outcomes.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
