//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// afriscore: reconcile country indicator tables and rescale them to 0-100
#[derive(Parser)]
#[command(name = "afriscore")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest the country column and indicator columns of a data file
    Detect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score indicator columns for the target countries
    Score {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// JSON file naming the country column and indicator columns
        #[arg(short, long, value_name = "JSON_FILE")]
        request: PathBuf,

        /// Output path for score records (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Report skipped indicators and unmatched country labels
        #[arg(long)]
        diagnostics: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use json or csv.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_score_arguments() {
        let cli = Cli::try_parse_from([
            "afriscore",
            "score",
            "data.csv",
            "--request",
            "req.json",
            "--format",
            "csv",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Score {
                file,
                request,
                format,
                diagnostics,
                output,
            } => {
                assert_eq!(file, PathBuf::from("data.csv"));
                assert_eq!(request, PathBuf::from("req.json"));
                assert_eq!(format, OutputFormat::Csv);
                assert!(!diagnostics);
                assert!(output.is_none());
            }
            Commands::Detect { .. } => panic!("expected score command"),
        }
    }

    #[test]
    fn test_score_requires_request() {
        assert!(Cli::try_parse_from(["afriscore", "score", "data.csv"]).is_err());
    }
}
