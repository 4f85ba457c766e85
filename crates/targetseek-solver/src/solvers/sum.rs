//! Subset sum via dynamic programming.

use targetseek_config::SearchConfig;
use targetseek_core::{Result, SeekError, Solution, Tolerance, ValueSet};

use super::SolveOutcome;

/// Maximum absolute quantized magnitude that is still exactly representable.
const MAX_QUANTIZED_MAGNITUDE: f64 = 9.0e15;

/// Tolerated rounding error when checking that a scaled value is integral.
const QUANT_EPS: f64 = 1.0e-6;

/// Finds a subset whose sum matches the target, by building a boolean
/// reachability table over (prefix length, achievable sum) and backtracking
/// a witness from the final row.
///
/// Values are quantized to integers at the configured decimal scale; a value
/// that is not integral at that scale is rejected as invalid input rather
/// than silently rounded. Negative values are supported by shifting the sum
/// axis so the whole reachable range is non-negative.
///
/// Policy: target 0 is satisfied by the empty subset, including for an empty
/// value set. A non-integral target is simply unreachable (not an error)
/// unless the tolerance band covers an integral sum.
///
/// # Example
///
/// ```
/// use targetseek_config::SearchConfig;
/// use targetseek_core::{Tolerance, ValueSet};
/// use targetseek_solver::SubsetSumSolver;
///
/// let set = ValueSet::from_values([3.0, 7.0, 2.0, 9.0]).unwrap();
/// let solver = SubsetSumSolver::new(&SearchConfig::default());
/// let outcome = solver.solve(&set, 9.0, Tolerance::Exact).unwrap();
/// let solution = outcome.solution.unwrap();
/// assert_eq!(solution.values().sum::<f64>(), 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct SubsetSumSolver {
    scale: f64,
    decimal_places: u32,
    max_table_cells: u64,
}

impl SubsetSumSolver {
    /// Creates a solver with the config's quantization scale and table limit.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            scale: config.quantization_scale(),
            decimal_places: config.decimal_places,
            max_table_cells: config.limits.max_table_cells,
        }
    }

    /// Searches for a subset of `set` summing to `target` within `tolerance`.
    ///
    /// Returns `Ok` with an empty `solution` when the target is unreachable.
    ///
    /// # Errors
    ///
    /// - [`SeekError::InvalidInput`] if a value is not integral at the
    ///   configured decimal scale.
    /// - [`SeekError::SizeLimitExceeded`] if the reachability table would
    ///   exceed the configured cell limit.
    pub fn solve(&self, set: &ValueSet, target: f64, tolerance: Tolerance) -> Result<SolveOutcome> {
        let values = self.quantize_values(set)?;
        let n = values.len();

        // Reachable sums lie between the sum of negatives and the sum of
        // positives. Sums are taken in i128 so the guard itself cannot
        // overflow.
        let neg_sum: i128 = values.iter().map(|&v| v as i128).filter(|&v| v < 0).sum();
        let pos_sum: i128 = values.iter().map(|&v| v as i128).filter(|&v| v > 0).sum();

        // Acceptance band in quantized units. An exact integral target
        // collapses the band to a single sum; a non-integral exact target
        // leaves it empty. Endpoints get the same rounding snap as the
        // values, so a target like 0.29 at scale 100 does not lose its
        // band to 28.999999999999996.
        let tol = tolerance.absolute_for(target);
        let band_lo = snap_to_unit((target - tol) * self.scale).ceil() as i128;
        let band_hi = snap_to_unit((target + tol) * self.scale).floor() as i128;
        let lo = band_lo.max(neg_sum);
        let hi = band_hi.min(pos_sum);
        if lo > hi {
            return Ok(SolveOutcome::miss(0));
        }

        let width_i128 = pos_sum - neg_sum + 1;
        let cells = (n as i128 + 1) * width_i128;
        if cells > self.max_table_cells as i128 {
            return Err(SeekError::SizeLimitExceeded(format!(
                "subset-sum table needs {cells} cells for {n} values, limit is {}",
                self.max_table_cells
            )));
        }
        let width = width_i128 as usize;

        // table[i * width + s] is true when some subset of the first i
        // values sums to s + neg_sum.
        let mut table = vec![false; (n + 1) * width];
        table[(-neg_sum) as usize] = true;
        for i in 1..=n {
            let v = values[i - 1] as i128;
            let (prev_rows, rest) = table.split_at_mut(i * width);
            let prev_row = &prev_rows[(i - 1) * width..];
            let cur_row = &mut rest[..width];
            for s in 0..width {
                let without = prev_row[s];
                let with = {
                    let j = s as i128 - v;
                    j >= 0 && (j as usize) < width && prev_row[j as usize]
                };
                cur_row[s] = without || with;
            }
        }

        // Closest reachable sum in the band wins; ties go to the smaller sum.
        let final_row = &table[n * width..];
        let center = target * self.scale;
        let mut chosen: Option<i128> = None;
        for s in lo..=hi {
            if !final_row[(s - neg_sum) as usize] {
                continue;
            }
            chosen = match chosen {
                None => Some(s),
                Some(best) if (s as f64 - center).abs() < (best as f64 - center).abs() => Some(s),
                other => other,
            };
        }
        let Some(chosen) = chosen else {
            return Ok(SolveOutcome::miss(cells as u64));
        };

        // Backtrack a witness: at row i, if the sum was already reachable
        // without value i-1 the value is excluded, otherwise it must be
        // included and the sum steps back by it.
        let mut indices = Vec::new();
        let mut s = chosen;
        for i in (1..=n).rev() {
            let prev_row = &table[(i - 1) * width..i * width];
            if prev_row[(s - neg_sum) as usize] {
                continue;
            }
            indices.push(i - 1);
            s -= values[i - 1] as i128;
        }
        indices.reverse();

        let aggregate = chosen as f64 / self.scale;
        let solution = Solution::from_indices(set, indices, aggregate);
        Ok(SolveOutcome::hit(solution, cells as u64))
    }

    fn quantize_values(&self, set: &ValueSet) -> Result<Vec<i64>> {
        set.values()
            .enumerate()
            .map(|(index, value)| {
                let scaled = value * self.scale;
                let rounded = scaled.round();
                if (scaled - rounded).abs() > QUANT_EPS {
                    return Err(SeekError::InvalidInput(format!(
                        "value {value} at index {index} is not integral at {} decimal places",
                        self.decimal_places
                    )));
                }
                if rounded.abs() > MAX_QUANTIZED_MAGNITUDE {
                    return Err(SeekError::InvalidInput(format!(
                        "value {value} at index {index} is too large to quantize exactly"
                    )));
                }
                Ok(rounded as i64)
            })
            .collect()
    }
}

/// Snaps a scaled quantity to the nearest integer when it sits within the
/// quantization epsilon, absorbing the float error of `value * scale`.
fn snap_to_unit(scaled: f64) -> f64 {
    let rounded = scaled.round();
    if (scaled - rounded).abs() <= QUANT_EPS {
        rounded
    } else {
        scaled
    }
}
