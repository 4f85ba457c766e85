//! Input data types.
//!
//! A search operates on a [`ValueSet`]: an ordered, immutable sequence of
//! [`DataPoint`]s. Values are validated once at construction so the solvers
//! can assume every value is finite.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekError};

/// A single numeric value together with its tabular provenance.
///
/// Provenance is optional: values built programmatically carry none, while
/// values ingested from a file remember the column name and the 1-based row
/// they came from (data rows start at 2, matching a spreadsheet view with a
/// header row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    value: f64,
    column: Option<String>,
    row: Option<usize>,
}

impl DataPoint {
    /// Creates a data point without provenance.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            column: None,
            row: None,
        }
    }

    /// Creates a data point with its source column and row.
    pub fn with_provenance(value: f64, column: impl Into<String>, row: usize) -> Self {
        Self {
            value,
            column: Some(column.into()),
            row: Some(row),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the source column name, if known.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Returns the source row number, if known.
    pub fn row(&self) -> Option<usize> {
        self.row
    }
}

impl From<f64> for DataPoint {
    fn from(value: f64) -> Self {
        DataPoint::new(value)
    }
}

/// An ordered collection of values to search over.
///
/// Duplicates are allowed; solutions refer to values by index, so equal
/// values remain distinguishable. The set is immutable for the duration of
/// a search.
///
/// # Example
///
/// ```
/// use targetseek_core::ValueSet;
///
/// let set = ValueSet::from_values([3.0, 7.0, 2.0, 9.0]).unwrap();
/// assert_eq!(set.len(), 4);
/// assert_eq!(set.value(1), Some(7.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueSet {
    points: Vec<DataPoint>,
}

impl ValueSet {
    /// Creates a value set from data points.
    ///
    /// # Errors
    ///
    /// Returns [`SeekError::InvalidInput`] if any value is NaN or infinite.
    pub fn new(points: Vec<DataPoint>) -> Result<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point.value().is_finite() {
                return Err(SeekError::InvalidInput(format!(
                    "value at index {index} is not finite ({})",
                    point.value()
                )));
            }
        }
        Ok(Self { points })
    }

    /// Creates a value set from bare values, without provenance.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Result<Self> {
        Self::new(values.into_iter().map(DataPoint::new).collect())
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the data point at `index`.
    pub fn point(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    /// Returns the numeric value at `index`.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(DataPoint::value)
    }

    /// Returns all data points in order.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Iterates over the numeric values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(DataPoint::value)
    }
}
