//! Score command - reconcile countries and rescale indicator columns.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use afriscore::{ScoreOutcome, ScoreRequest, Scorer};
use colored::Colorize;

use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    request: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    diagnostics: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let request_text = std::fs::read_to_string(&request)
        .map_err(|e| format!("Cannot read request {}: {}", request.display(), e))?;
    let request_path = request;
    let request = ScoreRequest::from_json(&request_text)?;
    tracing::debug!(
        request = %request_path.display(),
        country_column = %request.country_column,
        indicators = request.indicator_columns.len(),
        "loaded score request"
    );

    let outcome = Scorer::new().score(&file, &request)?;

    match &output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_outcome(&mut writer, &outcome, &format, diagnostics)?;
            writer.flush()?;
            eprintln!(
                "{} {} records to {}",
                "Wrote".green().bold(),
                outcome.records.len().to_string().white().bold(),
                path.display().to_string().cyan()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_outcome(&mut writer, &outcome, &format, diagnostics)?;
            writer.flush()?;
        }
    }

    if diagnostics || verbose {
        print_summary(&outcome);
    }

    Ok(())
}

/// Write the outcome in the requested format.
///
/// JSON with diagnostics is the whole outcome object; otherwise only the
/// record list is written. CSV never carries diagnostics.
fn write_outcome<W: Write>(
    writer: &mut W,
    outcome: &ScoreOutcome,
    format: &OutputFormat,
    diagnostics: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            if diagnostics {
                serde_json::to_writer_pretty(&mut *writer, outcome)?;
            } else {
                serde_json::to_writer_pretty(&mut *writer, &outcome.records)?;
            }
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for record in &outcome.records {
                csv_writer.serialize(record)?;
            }
            csv_writer.flush()?;
        }
    }
    Ok(())
}

/// Human-readable diagnostics on stderr.
fn print_summary(outcome: &ScoreOutcome) {
    eprintln!();
    eprintln!(
        "{} {} records",
        "Scored".cyan().bold(),
        outcome.records.len().to_string().white().bold()
    );

    if outcome.is_complete() {
        eprintln!("{}", "All indicators scored".green());
    } else {
        eprintln!("{}", "Skipped indicators:".yellow().bold());
        for skip in &outcome.skipped {
            eprintln!(
                "  {} ({}): {}",
                skip.indicator_id.white(),
                skip.column_name,
                skip.reason.to_string().red()
            );
        }
    }

    if !outcome.unmatched_labels.is_empty() {
        eprintln!(
            "{} {}",
            "Unmatched labels:".yellow().bold(),
            outcome.unmatched_labels.len()
        );
        for label in &outcome.unmatched_labels {
            eprintln!("  {}", label.dimmed());
        }
    }
}
