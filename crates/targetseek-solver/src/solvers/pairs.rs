//! Pairwise difference and quotient search.
//!
//! Both searches examine all unordered pairs in index order, so the first
//! hit is deterministic. Quadratic cost is bounded by the engine's overall
//! value-count limit.

use targetseek_config::SearchConfig;
use targetseek_core::{Result, Solution, Tolerance, ValueSet};

use super::SolveOutcome;

/// Finds a pair whose absolute difference |a - b| matches the target.
///
/// The difference is unsigned, so a negative target is unreachable unless
/// the tolerance band crosses zero.
#[derive(Debug, Clone, Default)]
pub struct DifferencePairSearch;

impl DifferencePairSearch {
    /// Creates a difference search; no limits beyond the engine's apply.
    pub fn new(_config: &SearchConfig) -> Self {
        Self
    }

    /// Searches all pairs of `set` for ||a - b| - target| within `tolerance`.
    pub fn solve(&self, set: &ValueSet, target: f64, tolerance: Tolerance) -> Result<SolveOutcome> {
        let tol = tolerance.absolute_for(target);
        let mut pairs: u64 = 0;
        for i in 0..set.len() {
            for j in (i + 1)..set.len() {
                pairs += 1;
                let a = set.value(i).unwrap_or_default();
                let b = set.value(j).unwrap_or_default();
                let diff = (a - b).abs();
                if (diff - target).abs() <= tol {
                    let solution = Solution::from_indices(set, vec![i, j], diff);
                    return Ok(SolveOutcome::hit(solution, pairs));
                }
            }
        }
        Ok(SolveOutcome::miss(pairs))
    }
}

/// Finds a pair whose quotient a/b or b/a matches the target.
///
/// Zero values are excluded outright, so division is always defined; a
/// target of zero is unreachable unless the tolerance band admits a small
/// nonzero quotient.
#[derive(Debug, Clone, Default)]
pub struct QuotientPairSearch;

impl QuotientPairSearch {
    /// Creates a quotient search; no limits beyond the engine's apply.
    pub fn new(_config: &SearchConfig) -> Self {
        Self
    }

    /// Searches all pairs of nonzero values for a quotient within
    /// `tolerance` of `target`.
    ///
    /// The returned solution's indices are ordered numerator first, so the
    /// aggregate is always `first / second`.
    pub fn solve(&self, set: &ValueSet, target: f64, tolerance: Tolerance) -> Result<SolveOutcome> {
        let candidates: Vec<(usize, f64)> = set
            .values()
            .enumerate()
            .filter(|&(_, v)| v != 0.0)
            .collect();

        let mut pairs: u64 = 0;
        for x in 0..candidates.len() {
            for y in (x + 1)..candidates.len() {
                pairs += 1;
                let (i, a) = candidates[x];
                let (j, b) = candidates[y];
                if tolerance.matches(a / b, target) {
                    let solution = Solution::from_indices(set, vec![i, j], a / b);
                    return Ok(SolveOutcome::hit(solution, pairs));
                }
                if tolerance.matches(b / a, target) {
                    let solution = Solution::from_indices(set, vec![j, i], b / a);
                    return Ok(SolveOutcome::hit(solution, pairs));
                }
            }
        }
        Ok(SolveOutcome::miss(pairs))
    }
}
