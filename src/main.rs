//! Regex synthesis CLI - Generate a regex from a file of examples.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;

use regex_synth::{
    ExampleSet, SearchConfig, SearchEngine, StopReason,
    schema::{EvaluationReport, SearchResult},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example-config" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <examples> [config.json]", args[0]);
        eprintln!();
        eprintln!("Generate a regex from a file of positive and negative examples.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  examples     One example per line: <positive> [<negative>],");
        eprintln!("               whitespace separated. Indent a line to give");
        eprintln!("               only a negative example.");
        eprintln!("  config.json  Optional search configuration");
        eprintln!();
        eprintln!("Print the default configuration with --example-config.");
        std::process::exit(1);
    }

    let examples_path = PathBuf::from(&args[1]);
    let examples = ExampleSet::from_file(&examples_path).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    if examples.is_empty() {
        log::warn!("No examples found in {}", examples_path.display());
    }

    // Load configuration
    let config: SearchConfig = match args.get(2) {
        Some(path) => {
            let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => SearchConfig::default(),
    };

    println!(
        "Loaded {} +examples, {} -examples from {}",
        examples.positive.len(),
        examples.negative.len(),
        examples_path.display()
    );

    let mut engine = SearchEngine::new(config, examples);
    let result = engine
        .run_with_callback(print_report)
        .unwrap_or_else(|e| {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        });

    print_result(&result);
}

fn print_report(report: &EvaluationReport) {
    println!("{} {}", report.score, report.pattern);
}

fn print_result(result: &SearchResult) {
    match result.stop_reason {
        StopReason::Solved => {
            println!("[Solved] Generated regex: {}", result.best.pattern);
        }
        StopReason::TimedOut => {
            println!(
                "[Timed out] Best partial solution regex: {}",
                result.best.pattern
            );
        }
    }
    println!(
        "Generations: {}, evaluations: {}, invalid patterns: {}, time: {:.3}s",
        result.stats.generations,
        result.stats.total_evaluations,
        result.stats.compile_failures,
        result.stats.elapsed_seconds
    );
}

fn print_example_config() {
    let config = SearchConfig::default();
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing config: {}", e);
            std::process::exit(1);
        }
    }
}
