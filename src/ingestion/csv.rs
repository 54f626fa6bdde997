//! CSV loading implementation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::table::LabeledTable;
use crate::types::{Value, range_labels};

use super::loader::LoadOptions;
use super::observability::LoadStats;

/// Load a delimited text file into a [`LabeledTable`].
///
/// Rules:
///
/// - The first record supplies the column labels.
/// - Records whose every field is empty are skipped; row labels are dense `0..n-1` over the kept
///   rows. A blank record still has to be as wide as the header.
/// - Each field is parsed as a number when possible and kept as text otherwise.
/// - Every record must have as many fields as the header.
///
/// The file is opened once and closed when this function returns, on success or failure.
pub fn load_csv_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> TableResult<LabeledTable> {
    load_csv_with_stats(path.as_ref(), options).map(|(table, _)| table)
}

/// Load CSV data from an existing CSV reader.
///
/// The reader should be built with headers enabled; see [`reader_builder`].
pub fn load_csv_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
    options: &LoadOptions,
) -> TableResult<LabeledTable> {
    read_table(rdr, options).map(|(table, _)| table)
}

/// A [`csv::ReaderBuilder`] configured from `options`.
///
/// Records are read in flexible mode so width mismatches surface as
/// [`TableError::MalformedInput`] with the offending line number.
pub fn reader_builder(options: &LoadOptions) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter);
    builder
}

pub(crate) fn load_csv_with_stats(
    path: &Path,
    options: &LoadOptions,
) -> TableResult<(LabeledTable, LoadStats)> {
    let file = File::open(path)?;
    let mut rdr = reader_builder(options).from_reader(file);
    read_table(&mut rdr, options)
}

pub(crate) fn read_table<R: Read>(
    rdr: &mut csv::Reader<R>,
    options: &LoadOptions,
) -> TableResult<(LabeledTable, LoadStats)> {
    let headers = rdr.headers().map_err(from_csv_error)?.clone();
    let column_labels: Vec<Value> = headers.iter().map(Value::from).collect();
    let width = column_labels.len();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let record = result.map_err(from_csv_error)?;

        // Width first: a short record of empty fields is malformed, not blank.
        if record.len() != width {
            return Err(TableError::MalformedInput {
                line: record.position().map_or(0, |p| p.line()),
                expected: width,
                found: record.len(),
            });
        }
        if record.iter().all(str::is_empty) {
            skipped += 1;
            continue;
        }

        rows.push(record.iter().map(|raw| coerce_field(raw, options.trim)).collect());
    }

    log::debug!(
        "loaded {} rows x {} columns ({} blank rows skipped)",
        rows.len(),
        width,
        skipped
    );

    let stats = LoadStats {
        rows: rows.len(),
        columns: width,
        skipped_blank_rows: skipped,
    };
    let row_labels = range_labels(rows.len());
    let table = LabeledTable::with_labels(rows, row_labels, column_labels)?;
    Ok((table, stats))
}

/// Numeric when the field parses as `f64`, raw text otherwise.
fn coerce_field(raw: &str, trim: bool) -> Value {
    let candidate = if trim { raw.trim() } else { raw };
    match candidate.parse::<f64>() {
        Ok(v) => Value::Number(v),
        Err(_) => Value::Text(raw.to_owned()),
    }
}

/// Lift I/O and width failures out of the CSV error so callers can match on them directly.
fn from_csv_error(err: csv::Error) -> TableError {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        return TableError::MalformedInput {
            line: pos.as_ref().map_or(0, |p| p.line()),
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }
    if !err.is_io_error() {
        return TableError::Csv(err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(io) => TableError::Io(io),
        other => TableError::Io(std::io::Error::other(format!("{other:?}"))),
    }
}
