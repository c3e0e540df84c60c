//! Detect command - suggest column roles for a data file.

use std::path::PathBuf;

use afriscore::Scorer;
use colored::Colorize;

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let result = Scorer::new().detect(&file)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Columns in".cyan().bold(),
        result.source.file.white()
    );
    println!(
        "  {} rows, {} columns, {} encoding",
        result.source.row_count.to_string().white().bold(),
        result.source.column_count,
        result.source.encoding
    );
    if verbose {
        println!("  sha256: {}", result.source.hash.dimmed());
    }
    println!();

    match result.columns.best_country_column() {
        Some(best) => println!("{} {}", "Country column:".yellow().bold(), best.green()),
        None => println!("{} none", "Country column:".yellow().bold()),
    }
    if verbose {
        for candidate in result.columns.country_columns.iter().skip(1) {
            println!("  alternative: {}", candidate);
        }
    }
    println!();

    println!("{}", "Indicator columns:".yellow().bold());
    if result.columns.indicator_columns.is_empty() {
        println!("  {}", "(none found)".dimmed());
    }
    for column in &result.columns.indicator_columns {
        println!("  {}", column);
    }

    Ok(())
}
