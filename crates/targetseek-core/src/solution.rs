//! Matched subsets.

use serde::{Deserialize, Serialize};

use crate::data::{DataPoint, ValueSet};

/// A subset of a [`ValueSet`] whose aggregation matched a target.
///
/// Indices refer to positions in the original value set; the corresponding
/// data points are copied in so a solution can be rendered after the value
/// set is gone. The empty solution is valid: it is the witness for sum
/// target 0 and product target 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    indices: Vec<usize>,
    points: Vec<DataPoint>,
    aggregate: f64,
}

impl Solution {
    /// Builds a solution from indices into `set`.
    ///
    /// Indices outside the set are skipped; solvers only produce in-range
    /// indices.
    pub fn from_indices(set: &ValueSet, indices: Vec<usize>, aggregate: f64) -> Self {
        let points = indices
            .iter()
            .filter_map(|&i| set.point(i).cloned())
            .collect();
        Self {
            indices,
            points,
            aggregate,
        }
    }

    /// The empty solution with the given aggregate.
    pub fn empty(aggregate: f64) -> Self {
        Self {
            indices: Vec::new(),
            points: Vec::new(),
            aggregate,
        }
    }

    /// Indices of the matched values in the original value set.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The matched data points, in index order.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// The matched numeric values, in index order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(DataPoint::value)
    }

    /// The achieved aggregate (sum, product, difference or quotient).
    pub fn aggregate(&self) -> f64 {
        self.aggregate
    }

    /// Number of values in the subset.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns whether this is the empty subset.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
