//! CSV export of the session results
//!
//! Produces the fixed four-column layout the downstream tooling expects:
//! `Prompt,Brand,Mentioned,Position`, one row per result. Fields are
//! comma-joined with no quoting or escaping, so embedded commas in free-text
//! fields pass through verbatim (see DESIGN.md).

use crate::model::check::BrandCheckResult;
use anyhow::Result;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fixed header row of the export
pub const CSV_HEADERS: [&str; 4] = ["Prompt", "Brand", "Mentioned", "Position"];

/// Write the results as CSV to any writer
pub fn write_csv<W: Write>(results: &[BrandCheckResult], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;

    for result in results {
        let position = result.position_label();
        csv_writer.write_record([
            result.prompt.as_str(),
            result.brand.as_str(),
            result.mentioned.label(),
            position.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the results to a CSV file, returning the number of rows written
pub fn export_results(results: &[BrandCheckResult], path: &Path) -> Result<usize> {
    let file = File::create(path)?;
    write_csv(results, file)?;
    Ok(results.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::check::Mentioned;

    fn result(prompt: &str, brand: &str, mentioned: Mentioned, position: Option<i64>) -> BrandCheckResult {
        BrandCheckResult {
            prompt: prompt.to_string(),
            brand: brand.to_string(),
            mentioned,
            position,
        }
    }

    fn export_to_string(results: &[BrandCheckResult]) -> String {
        let mut buffer = Vec::new();
        write_csv(results, &mut buffer).expect("Failed to write CSV");
        String::from_utf8(buffer).expect("CSV is not valid UTF-8")
    }

    #[test]
    fn test_header_is_exact() {
        let output = export_to_string(&[]);
        assert_eq!(output.lines().next(), Some("Prompt,Brand,Mentioned,Position"));
    }

    #[test]
    fn test_row_count_matches_results() {
        let results = vec![
            result("Best laptops?", "Acme", Mentioned::Yes, Some(3)),
            result("Best phones?", "Acme", Mentioned::No, Some(0)),
            result("Best tablets?", "Acme", Mentioned::Unknown, None),
        ];

        let output = export_to_string(&results);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), results.len() + 1);
        assert_eq!(lines[1], "Best laptops?,Acme,Yes,3");
        assert_eq!(lines[2], "Best phones?,Acme,No,0");
        // Missing position is an empty field
        assert_eq!(lines[3], "Best tablets?,Acme,N/A,");
    }

    #[test]
    fn test_embedded_commas_are_not_quoted() {
        // Known fidelity gap: free-text fields are not escaped, so a comma
        // in the prompt shifts the columns of that row.
        let results = vec![result("laptops, cheap", "Acme", Mentioned::Yes, Some(1))];

        let output = export_to_string(&results);
        assert_eq!(output.lines().nth(1), Some("laptops, cheap,Acme,Yes,1"));
    }

    #[test]
    fn test_empty_results_write_header_only() {
        let output = export_to_string(&[]);
        assert_eq!(output.lines().count(), 1);
    }
}
