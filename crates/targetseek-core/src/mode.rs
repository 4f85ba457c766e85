//! Aggregation modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeekError;

/// Selects how a subset is aggregated against the target.
///
/// Sum and product search arbitrary-size subsets; difference and quotient
/// are defined over pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Subset sum via dynamic programming.
    #[default]
    Sum,

    /// Subset product via pruned exhaustive search.
    Product,

    /// Pairwise absolute difference |a - b|.
    Difference,

    /// Pairwise quotient a/b or b/a.
    Quotient,
}

impl Mode {
    /// Returns the operator symbol used when rendering a solution formula.
    pub fn symbol(&self) -> &'static str {
        match self {
            Mode::Sum => "+",
            Mode::Product => "\u{d7}",
            Mode::Difference => "\u{2212}",
            Mode::Quotient => "\u{f7}",
        }
    }

    /// Returns whether this mode searches pairs only.
    pub fn is_pairwise(&self) -> bool {
        matches!(self, Mode::Difference | Mode::Quotient)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Sum => write!(f, "sum"),
            Mode::Product => write!(f, "product"),
            Mode::Difference => write!(f, "difference"),
            Mode::Quotient => write!(f, "quotient"),
        }
    }
}

impl FromStr for Mode {
    type Err = SeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Mode::Sum),
            "product" => Ok(Mode::Product),
            "difference" => Ok(Mode::Difference),
            "quotient" => Ok(Mode::Quotient),
            other => Err(SeekError::InvalidInput(format!(
                "unknown mode '{other}' (expected sum, product, difference or quotient)"
            ))),
        }
    }
}
