//! Match tolerance.

use approx::{abs_diff_eq, relative_eq};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekError};

/// How close an aggregate must be to the target to count as a match.
///
/// The default is [`Tolerance::Exact`]. Sum and difference searches treat a
/// relative tolerance as `r * |target|`; product and quotient searches use
/// true relative comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    /// Exact match (up to floating-point epsilon).
    #[default]
    Exact,

    /// Match within an absolute distance of the target.
    Absolute(f64),

    /// Match within a fraction of the target's magnitude.
    Relative(f64),
}

impl Tolerance {
    /// Validates the tolerance value.
    ///
    /// # Errors
    ///
    /// Returns [`SeekError::InvalidInput`] if the tolerance is negative or
    /// not finite.
    pub fn validate(&self) -> Result<()> {
        match self {
            Tolerance::Exact => Ok(()),
            Tolerance::Absolute(t) | Tolerance::Relative(t) => {
                if t.is_finite() && *t >= 0.0 {
                    Ok(())
                } else {
                    Err(SeekError::InvalidInput(format!(
                        "tolerance must be finite and non-negative, got {t}"
                    )))
                }
            }
        }
    }

    /// Returns whether `actual` matches `target` under this tolerance.
    pub fn matches(&self, actual: f64, target: f64) -> bool {
        match self {
            Tolerance::Exact => abs_diff_eq!(actual, target, epsilon = f64::EPSILON),
            Tolerance::Absolute(t) => (actual - target).abs() <= *t,
            Tolerance::Relative(r) => {
                relative_eq!(actual, target, max_relative = *r, epsilon = f64::EPSILON)
            }
        }
    }

    /// Converts this tolerance into an absolute distance around `target`.
    ///
    /// Used by the sum and difference solvers, which work on an absolute
    /// axis.
    pub fn absolute_for(&self, target: f64) -> f64 {
        match self {
            Tolerance::Exact => 0.0,
            Tolerance::Absolute(t) => *t,
            Tolerance::Relative(r) => r * target.abs(),
        }
    }
}
