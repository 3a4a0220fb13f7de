//! Turning user-supplied text into datasets
//!
//! Two input shapes are accepted:
//!
//! - Manual input: one comma-separated list of x values and one of y values,
//!   taken in the order given.
//! - CSV: x in the first column, y in the second. A leading row that does not
//!   parse as numbers is treated as a header, rows with a blank x or y cell are
//!   skipped, and the remaining samples are sorted by x.

use crate::error::{Error, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use numint_core::Dataset;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Parse two comma-separated lists into a dataset
///
/// Empty tokens (for example a trailing comma) are ignored.
///
/// # Errors
///
/// - [`Error::InvalidInput`] for a token that is not a number or lists of
///   different lengths
/// - [`Error::Core`] if the samples do not form a valid dataset
pub fn parse_manual_input(x_input: &str, y_input: &str) -> Result<Dataset> {
    let xs = parse_list(x_input)?;
    let ys = parse_list(y_input)?;

    if xs.len() != ys.len() {
        return Err(Error::InvalidInput(format!(
            "Number of X and Y values must be equal (got {} and {})",
            xs.len(),
            ys.len()
        )));
    }

    Ok(Dataset::from_xy(&xs, &ys)?)
}

fn parse_list(input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                Error::InvalidInput(format!("All values must be valid numbers (got '{token}')"))
            })
        })
        .collect()
}

/// Parse CSV text into a dataset
pub fn parse_csv_str(content: &str) -> Result<Dataset> {
    parse_csv(content.as_bytes())
}

/// Read and parse a CSV file
pub fn read_csv_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    parse_csv(file)
}

/// Parse CSV from any reader
///
/// # Errors
///
/// - [`Error::Csv`] for malformed CSV
/// - [`Error::InvalidRow`] for a row with fewer than two cells or a
///   non-numeric value
/// - [`Error::Core`] for fewer than two complete rows or duplicate x values
#[instrument(skip(reader))]
pub fn parse_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let records = csv.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let has_header = records.first().is_some_and(is_header);
    if has_header {
        debug!("Treating first CSV row as a header");
    }

    let mut samples = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for (index, record) in records.iter().enumerate().skip(usize::from(has_header)) {
        let row = record
            .position()
            .map_or(index as u64 + 1, |position| position.line());
        match parse_row(record, row)? {
            Some(sample) => samples.push(sample),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!("Skipped {} row(s) with blank cells", skipped);
    }

    // Stable sort keeps duplicate x values in file order for the error report
    samples.sort_by(|a: &(f64, f64), b| a.0.total_cmp(&b.0));
    debug!("Parsed {} samples", samples.len());

    Ok(Dataset::from_samples(samples)?)
}

/// A row whose non-empty cells do not all parse as numbers
fn is_header(record: &StringRecord) -> bool {
    record
        .iter()
        .filter(|cell| !cell.is_empty())
        .any(|cell| cell.parse::<f64>().is_err())
}

fn parse_row(record: &StringRecord, row: u64) -> Result<Option<(f64, f64)>> {
    if record.len() < 2 {
        return Err(Error::InvalidRow {
            row,
            reason: "must contain at least 2 values".to_string(),
        });
    }

    let (x, y) = (&record[0], &record[1]);
    if x.is_empty() || y.is_empty() {
        return Ok(None);
    }

    let parse = |cell: &str| {
        cell.parse::<f64>().map_err(|_| Error::InvalidRow {
            row,
            reason: "contains invalid numerical data".to_string(),
        })
    };
    Ok(Some((parse(x)?, parse(y)?)))
}
