use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use matchtrace::{
    benchmark, compare, results::BenchmarkResult, search, Algorithm, AppConfig, SearchResult,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one algorithm and optionally show its execution trace
    Search {
        /// Text to search in
        #[arg(short, long)]
        text: String,

        /// Pattern to search for
        #[arg(short, long)]
        pattern: String,

        /// Algorithm to run (naive|kmp|boyer_moore|rabin_karp|z_algorithm)
        #[arg(short, long, default_value = "naive")]
        algorithm: String,

        /// Record and print the step-by-step execution trace
        #[arg(long)]
        trace: bool,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run all five algorithms over the same input and compare timings
    Compare {
        /// Text to search in
        #[arg(short, long)]
        text: String,

        /// Pattern to search for
        #[arg(short, long)]
        pattern: String,

        /// Emit the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Benchmark all algorithms across increasing text sizes
    Benchmark {
        /// Text sizes to benchmark (default from configuration)
        #[arg(short = 's', long = "size")]
        sizes: Vec<usize>,

        /// Pattern length
        #[arg(short = 'm', long)]
        pattern_size: Option<usize>,

        /// Trials per algorithm per size
        #[arg(short = 'n', long)]
        trials: Option<usize>,

        /// Seed for reproducible text generation
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_from(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.thread_count.get())
        .build_global()
        .ok();

    match cli.command {
        Commands::Search {
            text,
            pattern,
            algorithm,
            trace,
            json,
        } => {
            let algorithm: Algorithm = algorithm.parse()?;
            let result = search(&text, &pattern, algorithm, trace)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_search_result(&result, &pattern);
            }
            Ok(())
        }
        Commands::Compare { text, pattern, json } => {
            let results = compare(&text, &pattern)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_comparison(&results);
            }
            Ok(())
        }
        Commands::Benchmark {
            sizes,
            pattern_size,
            trials,
            seed,
            json,
        } => {
            let sizes = if sizes.is_empty() { None } else { Some(sizes) };
            let params = config
                .merge_with_cli(sizes, pattern_size, trials, seed)
                .bench_params();
            let result = benchmark(&params)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_benchmark(&result);
            }
            Ok(())
        }
    }
}

fn print_search_result(result: &SearchResult, pattern: &str) {
    if let Some(frames) = &result.frames {
        println!("{}", "Execution trace:".bold());
        for (i, frame) in frames.iter().enumerate() {
            println!(
                "{:>5}  {}  {}",
                i.to_string().green(),
                format!("[{}]", frame.kind()).blue(),
                frame.message()
            );
        }
        println!();
    }

    if result.matches.is_empty() {
        println!("No matches for '{}'", pattern.yellow());
    } else {
        println!(
            "Found {} match(es) at: {}",
            result.matches.len().to_string().green(),
            format!("{:?}", result.matches).green()
        );
    }
    println!("Algorithm: {}, elapsed: {:?}", result.algorithm, result.elapsed);
}

fn print_comparison(results: &BTreeMap<Algorithm, SearchResult>) {
    for (algorithm, result) in results {
        println!(
            "{:<12} {:>4} match(es) in {:?}  {}",
            algorithm.to_string().blue(),
            result.matches.len().to_string().green(),
            result.elapsed,
            format!("{:?}", result.matches)
        );
    }
}

fn print_benchmark(result: &BenchmarkResult) {
    print!("{:<12}", "size".bold());
    for size in &result.text_sizes {
        print!(" {size:>12}");
    }
    println!();

    for (algorithm, times) in &result.mean_times {
        print!("{:<12}", algorithm.to_string().blue());
        for time in times {
            print!(" {:>12}", format!("{time:?}"));
        }
        println!();
    }
}
