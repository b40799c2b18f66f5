//! CSV ingestion into a Frame.
//!
//! The first column is the index unless the caller asks for a positional
//! one. Index detection is all-or-nothing per flavor: the column becomes
//! temporal only when every value parses as a date or datetime, numeric only
//! when every value parses as f64, and a label index otherwise. Data columns
//! must be numeric throughout; a bad cell is reported with its column and
//! line.

use chartab::{ChartError, Frame, Index};
use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Read a CSV file with a header row into a frame.
///
/// With `positional_index` every column is data and rows count from zero.
pub fn read_frame(path: &str, positional_index: bool) -> Result<Frame, ChartError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| ChartError::ParseError(format!("cannot read '{path}': {e}")))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ChartError::ParseError(format!("bad CSV header in '{path}': {e}")))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(ChartError::ParseError(format!("'{path}' has no columns")));
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (row, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| ChartError::ParseError(format!("bad CSV row in '{path}': {e}")))?;
        if record.len() != headers.len() {
            // Header line is line 1.
            return Err(ChartError::ParseError(format!(
                "line {}: expected {} fields, got {}",
                row + 2,
                headers.len(),
                record.len()
            )));
        }
        for (col, value) in record.iter().enumerate() {
            cells[col].push(value.to_string());
        }
    }

    let (index, data_start) = if positional_index {
        (Index::Range, 0)
    } else {
        (detect_index(&cells[0]), 1)
    };

    let mut columns = Vec::with_capacity(headers.len().saturating_sub(data_start));
    for (name, raw) in headers.iter().zip(cells.iter()).skip(data_start) {
        columns.push((name.clone(), parse_column(name, raw)?));
    }

    Frame::new(index, columns)
}

/// Pick the index flavor the raw values support.
fn detect_index(raw: &[String]) -> Index {
    if raw.is_empty() {
        return Index::Range;
    }
    if let Some(timestamps) = raw
        .iter()
        .map(|value| parse_timestamp(value))
        .collect::<Option<Vec<_>>>()
    {
        return Index::Timestamps(timestamps);
    }
    if let Some(numbers) = raw
        .iter()
        .map(|value| value.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()
    {
        return Index::Numbers(numbers);
    }
    Index::Labels(raw.to_vec())
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(NaiveDateTime::from)
        })
}

fn parse_column(name: &str, raw: &[String]) -> Result<Vec<f64>, ChartError> {
    raw.iter()
        .enumerate()
        .map(|(row, value)| {
            value.trim().parse::<f64>().map_err(|_| {
                ChartError::ParseError(format!(
                    "column '{name}', line {}: invalid number '{value}'",
                    row + 2
                ))
            })
        })
        .collect()
}
