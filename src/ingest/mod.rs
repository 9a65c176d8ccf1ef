//! Converts two-column tabular rosters (spreadsheet workbooks or CSV text)
//! into the space-separated power text the roster parser consumes.
//!
//! Each row whose first two cells both hold a numeric value contributes its
//! two integers, in order, to the output token stream. Rows missing either
//! value, or holding non-numeric text, are skipped.

use std::fmt;
use std::path::Path;

use calamine::Reader;

#[derive(Debug)]
pub enum ConvertError {
    Read(std::io::Error),
    Workbook(calamine::Error),
    Csv(csv::Error),
    NoSheets,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read input file: {err}"),
            Self::Workbook(err) => write!(f, "failed to open workbook: {err}"),
            Self::Csv(err) => write!(f, "failed to parse csv: {err}"),
            Self::NoSheets => write!(f, "workbook contains no sheets"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<calamine::Error> for ConvertError {
    fn from(err: calamine::Error) -> Self {
        Self::Workbook(err)
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Converts the first sheet of a workbook (`.xlsx`, `.xls`, `.ods`) to
/// power text.
pub fn convert_workbook(path: &Path) -> Result<String, ConvertError> {
    let mut workbook = calamine::open_workbook_auto(path)?;
    let names = workbook.sheet_names();
    let sheet_name = names.first().cloned().ok_or(ConvertError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut tokens: Vec<String> = Vec::new();
    for row in range.rows() {
        let first = cell_to_i64(row.first());
        let second = cell_to_i64(row.get(1));
        if let (Some(id), Some(power)) = (first, second) {
            tokens.push(id.to_string());
            tokens.push(power.to_string());
        }
    }
    Ok(tokens.join(" "))
}

/// Converts two-column CSV text to power text. Records are not required to
/// have uniform lengths; short records are skipped like incomplete rows.
pub fn convert_csv_text(text: &str) -> Result<String, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut tokens: Vec<String> = Vec::new();
    for result in reader.records() {
        let record = result?;
        let first = record.get(0).and_then(parse_numeric_token);
        let second = record.get(1).and_then(parse_numeric_token);
        if let (Some(id), Some(power)) = (first, second) {
            tokens.push(id.to_string());
            tokens.push(power.to_string());
        }
    }
    Ok(tokens.join(" "))
}

/// Converts a file by extension: CSV goes through the text path, everything
/// else is treated as a workbook.
pub fn convert_file(path: &Path) -> Result<String, ConvertError> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        let text = std::fs::read_to_string(path).map_err(ConvertError::Read)?;
        convert_csv_text(&text)
    } else {
        convert_workbook(path)
    }
}

fn cell_to_i64(cell: Option<&calamine::Data>) -> Option<i64> {
    match cell {
        Some(calamine::Data::Int(value)) => Some(*value),
        // Spreadsheets store most numbers as floats; fractional parts are
        // truncated the way the id/power columns expect.
        Some(calamine::Data::Float(value)) => Some(*value as i64),
        Some(calamine::Data::String(raw)) => parse_numeric_token(raw),
        _ => None,
    }
}

fn parse_numeric_token(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    trimmed.parse::<f64>().ok().map(|value| value as i64)
}
