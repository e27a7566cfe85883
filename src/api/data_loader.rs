use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::Record;
use crate::error::{ChartError, ChartResult};

const STATE_COLUMN: &str = "state";
const MALE_COLUMN: &str = "male";
const FEMALE_COLUMN: &str = "female";

/// Reads every record from a CSV file. All-or-nothing: any bad row fails the load.
pub fn load_records_from_path(path: impl AsRef<Path>) -> ChartResult<Vec<Record>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading records");
    let file = File::open(path)?;
    load_records(file)
}

/// Reads every record from CSV text with a header row.
///
/// Columns are matched by header name; extra columns are ignored.
pub fn load_records<R: Read>(reader: R) -> ChartResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or(ChartError::MissingColumn(name))
    };
    let state_idx = column(STATE_COLUMN)?;
    let male_idx = column(MALE_COLUMN)?;
    let female_idx = column(FEMALE_COLUMN)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let row_number = index + 1;

        let state = row.get(state_idx).unwrap_or_default();
        if state.is_empty() {
            return Err(ChartError::InvalidRecord {
                row: row_number,
                column: STATE_COLUMN,
                reason: "value is empty".to_owned(),
            });
        }
        let (male, male_text) = parse_percentage(&row, male_idx, row_number, MALE_COLUMN)?;
        let (female, female_text) =
            parse_percentage(&row, female_idx, row_number, FEMALE_COLUMN)?;
        records.push(Record::new(state, male, female).with_source_text(male_text, female_text));
    }

    debug!(records = records.len(), "data read in");
    Ok(records)
}

/// Parses one numeric cell, returning the value and the trimmed cell text.
fn parse_percentage<'r>(
    row: &'r csv::StringRecord,
    index: usize,
    row_number: usize,
    column: &'static str,
) -> ChartResult<(f64, &'r str)> {
    let raw = row.get(index).unwrap_or_default();
    if raw.is_empty() {
        return Err(ChartError::InvalidRecord {
            row: row_number,
            column,
            reason: "value is empty".to_owned(),
        });
    }
    let value: f64 = raw.parse().map_err(|_| ChartError::InvalidRecord {
        row: row_number,
        column,
        reason: format!("`{raw}` is not a number"),
    })?;
    if !value.is_finite() {
        return Err(ChartError::InvalidRecord {
            row: row_number,
            column,
            reason: format!("`{raw}` is not finite"),
        });
    }
    Ok((value, raw))
}
