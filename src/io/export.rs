//! CSV export for the per-category emission breakdown.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::report::EmissionReport;

/// Column header for the breakdown CSV.
const HEADER: &str = "category,emissions_kg,share_pct";

/// Exports the report's category breakdown to a CSV file at the given path.
///
/// Writes a header row followed by one row per category in the fixed
/// category order. Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(report: &EmissionReport, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(report, buf)
}

/// Writes the category breakdown as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(report: &EmissionReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for (category, emissions_kg) in report.categories.iter() {
        let share_pct = if report.total_kg > 0.0 {
            100.0 * emissions_kg / report.total_kg
        } else {
            0.0
        };
        wtr.write_record(&[
            category.label().to_string(),
            format!("{emissions_kg:.4}"),
            format!("{share_pct:.2}"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
