//! Subset product via pruned exhaustive search.

use smallvec::SmallVec;
use targetseek_config::SearchConfig;
use targetseek_core::{Result, SeekError, Solution, Tolerance, ValueSet};

use super::SolveOutcome;

/// Finds a subset whose product matches the target, by depth-first
/// enumeration of index subsets with pruning.
///
/// Enumeration is exponential in the worst case, so two guards apply before
/// and during the search: the value count must not exceed the configured
/// product limit, and exploration stops with a size-limit error once the
/// node budget is spent. Prefix order makes the first hit deterministic.
///
/// Pruning and short-circuits:
/// - zero values never join a nonzero-product subset; when the tolerance band
///   admits zero, a single zero element satisfies the target outright (policy)
///   and otherwise the search runs over the nonzero values alone;
/// - a branch is abandoned when the partial product's magnitude already
///   exceeds the acceptance bound, which is only valid when every candidate
///   has magnitude >= 1 (remaining factors can then never shrink it);
/// - sign is carried through the running product, so negative targets are
///   reachable from negative factors.
///
/// Policy: target 1 is satisfied by the empty subset.
#[derive(Debug, Clone)]
pub struct SubsetProductSearch {
    max_values: usize,
    node_limit: u64,
}

struct Dfs<'a> {
    /// (original index, value) with zeros already excluded.
    candidates: &'a [(usize, f64)],
    target: f64,
    tolerance: Tolerance,
    /// Magnitude bound for pruning, valid only when `can_prune` is set.
    bound: f64,
    can_prune: bool,
    node_limit: u64,
    nodes: u64,
}

impl SubsetProductSearch {
    /// Creates a search with the config's product limits.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            max_values: config.limits.max_product_values,
            node_limit: config.limits.node_limit,
        }
    }

    /// Searches for a subset of `set` whose product matches `target` within
    /// `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns [`SeekError::SizeLimitExceeded`] when the value set exceeds
    /// the product value limit, or when the node budget runs out before the
    /// search space is exhausted.
    pub fn solve(&self, set: &ValueSet, target: f64, tolerance: Tolerance) -> Result<SolveOutcome> {
        if set.len() > self.max_values {
            return Err(SeekError::SizeLimitExceeded(format!(
                "{} values exceed the product search limit of {} (exponential search space)",
                set.len(),
                self.max_values
            )));
        }

        // Empty-subset policy: the empty product is 1.
        if tolerance.matches(1.0, target) {
            return Ok(SolveOutcome::hit(Solution::empty(1.0), 0));
        }

        // Zero short-circuit: any subset containing a zero has product zero,
        // so a single zero element covers any target whose band admits zero.
        // Without a zero element the band may still contain small nonzero
        // products, so the search proceeds over the remaining values.
        if tolerance.matches(0.0, target) {
            if let Some(zero) = set.values().position(|v| v == 0.0) {
                return Ok(SolveOutcome::hit(
                    Solution::from_indices(set, vec![zero], 0.0),
                    0,
                ));
            }
        }

        let candidates: Vec<(usize, f64)> = set
            .values()
            .enumerate()
            .filter(|&(_, v)| v != 0.0)
            .collect();

        let mut dfs = Dfs {
            candidates: &candidates,
            target,
            tolerance,
            bound: target.abs() + tolerance.absolute_for(target),
            can_prune: candidates.iter().all(|&(_, v)| v.abs() >= 1.0),
            node_limit: self.node_limit,
            nodes: 0,
        };

        let mut stack: SmallVec<[usize; 8]> = SmallVec::new();
        let found = dfs.explore(0, 1.0, &mut stack)?;
        let nodes = dfs.nodes;
        Ok(match found {
            Some(aggregate) => {
                let indices: Vec<usize> = stack.iter().map(|&slot| candidates[slot].0).collect();
                SolveOutcome::hit(Solution::from_indices(set, indices, aggregate), nodes)
            }
            None => SolveOutcome::miss(nodes),
        })
    }
}

impl Dfs<'_> {
    /// Extends the current subset with candidates from `start` onward.
    ///
    /// On a hit the matched slots are left on `stack` and the achieved
    /// product is returned.
    fn explore(
        &mut self,
        start: usize,
        partial: f64,
        stack: &mut SmallVec<[usize; 8]>,
    ) -> Result<Option<f64>> {
        for slot in start..self.candidates.len() {
            self.nodes += 1;
            if self.nodes > self.node_limit {
                return Err(SeekError::SizeLimitExceeded(format!(
                    "product search exceeded the node budget of {}",
                    self.node_limit
                )));
            }

            let next = partial * self.candidates[slot].1;
            stack.push(slot);
            if self.tolerance.matches(next, self.target) {
                return Ok(Some(next));
            }
            if !(self.can_prune && next.abs() > self.bound) {
                if let Some(aggregate) = self.explore(slot + 1, next, stack)? {
                    return Ok(Some(aggregate));
                }
            }
            stack.pop();
        }
        Ok(None)
    }
}
