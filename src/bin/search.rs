// Wordseek CLI
// Command-line front end: loads a dictionary file, translates the query,
// and prints a listing or a JSON response body

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use wordseek::{parse_constraints, SearchEngine, WordList, DEFAULT_SUGGESTION_LIMIT};

/// Wordseek - search a word list with patterns or constraints
#[derive(Parser, Debug)]
#[command(name = "wordseek")]
#[command(about = "Search a word list with wildcard patterns or natural-language constraints", long_about = None)]
#[command(version)]
struct Args {
    /// Query text
    /// - pattern form: "w___s" ('_' matches any single letter)
    /// - free text: "5 letters [o]" (required chars in brackets)
    /// - with --advanced: "5 letter words starting with w containing o"
    #[arg(value_name = "QUERY")]
    query: String,

    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "FILE")]
    dict: PathBuf,

    /// Translate the query into structured constraints
    #[arg(short, long)]
    advanced: bool,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "50")]
    limit: usize,

    /// Emit a JSON response body instead of a listing
    #[arg(short, long)]
    json: bool,

    /// Show dictionary statistics
    #[arg(short, long)]
    verbose: bool,
}

/// JSON response body, mirroring what an HTTP handler would emit.
#[derive(Serialize)]
struct Response {
    query: String,
    results: Vec<String>,
    count: usize,
    suggestions: Vec<String>,
    timestamp: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let list = WordList::load_from_path(&args.dict)?;
    let engine = SearchEngine::load(&list.entries);

    if args.verbose {
        println!(
            "Dictionary loaded: {} words ({} raw entries)",
            engine.word_count(),
            list.len()
        );
        let mut histogram: Vec<(usize, usize)> =
            engine.length_histogram().into_iter().collect();
        histogram.sort_unstable();
        for (length, count) in histogram {
            println!("  {:>2} letters: {} words", length, count);
        }
        println!();
    }

    let matches = if args.advanced {
        let constraints = parse_constraints(&args.query);
        if args.verbose {
            println!("Constraints: {:?}\n", constraints);
        }
        engine.advanced_search(&constraints)
    } else {
        engine.search(&args.query)
    };

    let suggestions = engine.suggestions(&args.query, DEFAULT_SUGGESTION_LIMIT);

    let total = matches.len();
    let mut results = matches;
    results.truncate(args.limit);

    if args.json {
        let response = Response {
            query: args.query,
            count: results.len(),
            results,
            suggestions,
            timestamp: unix_timestamp(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matches found.");
    } else {
        if total > results.len() {
            println!("Found {} matches (showing {}):\n", total, results.len());
        } else {
            println!("Found {} matches:\n", total);
        }
        for (idx, word) in results.iter().enumerate() {
            println!("{:>3}. {}", idx + 1, word);
        }
    }

    if !suggestions.is_empty() {
        println!("\nSuggestions: {}", suggestions.join(", "));
    }

    Ok(())
}

/// Seconds since the Unix epoch, for the response timestamp.
fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
