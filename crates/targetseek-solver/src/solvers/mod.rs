//! Per-mode solvers.
//!
//! Each solver handles one aggregation mode for one target. Solvers are
//! stateless apart from their configured limits; [`crate::engine`] owns
//! dispatch and multi-target iteration.

mod pairs;
mod product;
mod sum;


pub use pairs::{DifferencePairSearch, QuotientPairSearch};
pub use product::SubsetProductSearch;
pub use sum::SubsetSumSolver;

use targetseek_core::Solution;

/// Outcome of a single-target solve.
///
/// `None` means the target is unreachable, which is a normal result, not an
/// error. `explored` counts examined candidates (DP cells, search nodes, or
/// pairs, depending on the solver).
#[derive(Debug, Clone, Default)]
pub struct SolveOutcome {
    /// A witnessing subset, if one exists.
    pub solution: Option<Solution>,
    /// How much of the search space was examined.
    pub explored: u64,
}

impl SolveOutcome {
    /// An outcome with no solution.
    pub fn miss(explored: u64) -> Self {
        Self {
            solution: None,
            explored,
        }
    }

    /// An outcome carrying a solution.
    pub fn hit(solution: Solution, explored: u64) -> Self {
        Self {
            solution: Some(solution),
            explored,
        }
    }
}
