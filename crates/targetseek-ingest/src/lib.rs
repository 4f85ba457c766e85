//! Tabular data ingestion for TargetSeek.
//!
//! This crate is the typed boundary between loosely-typed tabular input and
//! the search core: it reads CSV, decides which columns are numeric, and
//! converts the selected columns into a validated
//! [`ValueSet`](targetseek_core::ValueSet) with provenance, so the solvers
//! only ever see finite numbers.
//!
//! Row numbering starts at 2 for the first data row, matching how the rows
//! appear in a spreadsheet with a header line.
//!
//! # Example
//!
//! ```
//! use targetseek_ingest::CsvSource;
//!
//! let csv = "amount,memo\n10.5,coffee\n3.25,tea\n";
//! let source = CsvSource::from_reader(csv.as_bytes()).unwrap();
//! assert_eq!(source.numeric_columns(), &["amount".to_string()]);
//!
//! let set = source.value_set(&["amount"]).unwrap();
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.point(0).unwrap().row(), Some(2));
//! ```

use std::io::Read;
use std::path::Path;

use targetseek_core::{DataPoint, Result, SeekError, ValueSet};

/// First data row number as seen in a spreadsheet (row 1 is the header).
const FIRST_DATA_ROW: usize = 2;

/// A CSV table held in memory, with numeric columns detected.
///
/// A column counts as numeric when every non-empty cell parses as a number;
/// blank cells are skipped during extraction, mirroring how empty
/// spreadsheet cells are dropped rather than treated as zero.
#[derive(Debug, Clone)]
pub struct CsvSource {
    headers: Vec<String>,
    /// Rows in file order; cells are trimmed strings.
    rows: Vec<Vec<String>>,
    numeric_columns: Vec<String>,
}

impl CsvSource {
    /// Reads a CSV file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SeekError::InvalidInput`] when the file cannot be read or
    /// is not well-formed CSV.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path).map_err(|e| {
            SeekError::InvalidInput(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_csv_reader(reader)
    }

    /// Reads CSV from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_csv_reader(csv::Reader::from_reader(reader))
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| SeekError::InvalidInput(format!("malformed CSV header: {e}")))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.map_err(|e| SeekError::InvalidInput(format!("malformed CSV row: {e}")))?;
            rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
        }

        let numeric_columns = detect_numeric_columns(&headers, &rows);
        Ok(Self {
            headers,
            rows,
            numeric_columns,
        })
    }

    /// Returns all column names, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the names of columns whose non-empty cells all parse as
    /// numbers.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric_columns
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Extracts the selected columns into a value set with provenance.
    ///
    /// Values are ordered column by column, then by row, matching the
    /// order they would be scanned in a spreadsheet selection.
    ///
    /// # Errors
    ///
    /// Returns [`SeekError::InvalidInput`] when a selected column does not
    /// exist or is not numeric.
    pub fn value_set(&self, columns: &[impl AsRef<str>]) -> Result<ValueSet> {
        if columns.is_empty() {
            return Err(SeekError::InvalidInput(
                "no columns selected".to_string(),
            ));
        }

        let mut points = Vec::new();
        for column in columns {
            let column = column.as_ref();
            let index = self
                .headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| {
                    SeekError::InvalidInput(format!("column '{column}' not found"))
                })?;
            if !self.numeric_columns.iter().any(|c| c == column) {
                return Err(SeekError::InvalidInput(format!(
                    "column '{column}' is not numeric"
                )));
            }

            for (row_offset, row) in self.rows.iter().enumerate() {
                let cell = row.get(index).map(String::as_str).unwrap_or("");
                if cell.is_empty() {
                    continue;
                }
                // Parse cannot fail here: the column already passed detection.
                let value: f64 = cell.parse().map_err(|_| {
                    SeekError::InvalidInput(format!(
                        "cell '{cell}' in column '{column}' is not numeric"
                    ))
                })?;
                points.push(DataPoint::with_provenance(
                    value,
                    column,
                    FIRST_DATA_ROW + row_offset,
                ));
            }
        }
        ValueSet::new(points)
    }

    /// Extracts every numeric column.
    pub fn full_value_set(&self) -> Result<ValueSet> {
        let columns = self.numeric_columns.clone();
        self.value_set(&columns)
    }
}

fn detect_numeric_columns(headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            let mut saw_value = false;
            for row in rows {
                let cell = row.get(*index).map(String::as_str).unwrap_or("");
                if cell.is_empty() {
                    continue;
                }
                if cell.parse::<f64>().map_or(true, |v| !v.is_finite()) {
                    return false;
                }
                saw_value = true;
            }
            saw_value
        })
        .map(|(_, header)| header.clone())
        .collect()
}
