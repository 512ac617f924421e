//! termsim - fuzzy string search from the command line
//!
//! Scores candidates against a term by edit-distance similarity and prints
//! the ones above a threshold.
//!
//! Usage:
//!     termsim search apple apple pineapple orange --threshold 0.5
//!     termsim search apple --file fruit.txt --format json
//!     termsim distance kitten knitting
//!     termsim similarity kitten knitting
//!
//! Environment variables:
//! - `TERMSIM_THRESHOLD`: default threshold (default: 0.5)
//! - `TERMSIM_FORMAT`: default output format, `text` or `json` (default: text)
//! - `RUST_LOG`: logging filter, overrides `--log-level`

mod config;
mod error;
mod input;
mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use config::{OutputFormat, SearchConfig};
use error::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "termsim")]
#[command(about = "Fuzzy string search by edit-distance similarity")]
#[command(version)]
struct Args {
    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print candidates whose similarity to TERM exceeds the threshold
    Search {
        /// Term to compare every candidate against
        term: String,

        /// Candidates given inline
        candidates: Vec<String>,

        /// File with one candidate per line (`-` reads stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Exclusive minimum similarity [env: TERMSIM_THRESHOLD, default: 0.5]
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Output format [env: TERMSIM_FORMAT, default: text]
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the edit distance between two strings
    Distance { a: String, b: String },

    /// Print the similarity of two strings
    Similarity { a: String, b: String },
}

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init_with_filter(&args.log_level);

    match run(args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "termsim failed");
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(e: &Error) -> String {
    format!("error: {e}")
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Search {
            term,
            candidates,
            file,
            threshold,
            format,
        } => {
            let config = SearchConfig::resolve(threshold, format)?;
            let candidates = input::gather_candidates(candidates, file.as_ref())?;

            info!(
                term = %term,
                candidates = candidates.len(),
                threshold = config.threshold,
                "searching"
            );

            let results = termsim_core::search(&term, &candidates, config.threshold);
            render::render(&results, config.format)
        }
        Command::Distance { a, b } => Ok(termsim_core::levenshtein(&a, &b).to_string()),
        Command::Similarity { a, b } => Ok(format!("{:.2}", termsim_core::similarity(&a, &b))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let args = Args::try_parse_from([
            "termsim", "search", "apple", "apple", "pineapple", "--threshold", "0.25",
        ])
        .unwrap();
        match args.command {
            Command::Search {
                term,
                candidates,
                threshold,
                file,
                format,
            } => {
                assert_eq!(term, "apple");
                assert_eq!(candidates, vec!["apple", "pineapple"]);
                assert_eq!(threshold, Some(0.25));
                assert!(file.is_none());
                assert!(format.is_none());
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_message_is_single_line() {
        let e = Error::Config("TERMSIM_FORMAT: expected `text` or `json`, got `yaml`".to_string());
        let message = failure_message(&e);
        assert_eq!(
            message,
            "error: configuration error: TERMSIM_FORMAT: expected `text` or `json`, got `yaml`"
        );
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn test_run_reports_missing_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = run(Command::Search {
            term: "apple".to_string(),
            candidates: Vec::new(),
            file: Some(missing),
            threshold: Some(0.5),
            format: Some(OutputFormat::Text),
        })
        .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(failure_message(&err).starts_with("error: failed to read candidates from "));
    }

    #[test]
    fn test_run_distance_and_similarity() {
        let distance = run(Command::Distance {
            a: "kitten".to_string(),
            b: "knitting".to_string(),
        })
        .unwrap();
        assert_eq!(distance, "3");

        let similarity = run(Command::Similarity {
            a: "kitten".to_string(),
            b: "knitting".to_string(),
        })
        .unwrap();
        assert_eq!(similarity, "0.63");
    }

    #[test]
    fn test_run_search_with_explicit_settings() {
        let output = run(Command::Search {
            term: "apple".to_string(),
            candidates: vec![
                "apple".to_string(),
                "pineapple".to_string(),
                "orange".to_string(),
            ],
            file: None,
            threshold: Some(0.0),
            format: Some(OutputFormat::Text),
        })
        .unwrap();
        assert_eq!(
            output,
            "apple\t1.00\npineapple\t0.56\norange\t0.17\n3 matches for \"apple\""
        );
    }
}
