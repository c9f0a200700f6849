// crates/bytefit-core/src/search.rs

use crate::error::Result;
use crate::extract::extract;
use crate::fit::evaluate::{evaluate, EvalParams};
use crate::fit::Fit;
use crate::hypothesis::space::SearchSpace;
use crate::sample::Sample;
use crate::validate::validate_search;

/// Scan accounting for the scoreboard. Purely informational.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Hypotheses enumerated from the space.
    pub hypotheses: u64,
    /// Skipped without scoring: window or key index outside some buffer.
    pub infeasible: u64,
    /// Scored against the full batch.
    pub evaluated: u64,
}

/// Exhaustive search over the hypothesis space.
///
/// Every accepted fit is collected, not just the first: spurious matches
/// are expected in a small space and filtering them is the reader's job.
/// A hypothesis must be feasible for every sample in the batch or it is
/// skipped whole; it cannot partially fit.
pub fn search(samples: &[Sample], space: &SearchSpace, p: &EvalParams) -> Result<Vec<Fit>> {
    search_with_stats(samples, space, p).map(|(fits, _)| fits)
}

pub fn search_with_stats(
    samples: &[Sample],
    space: &SearchSpace,
    p: &EvalParams,
) -> Result<(Vec<Fit>, SearchStats)> {
    validate_search(samples, space, p)?;

    let targets: Vec<f64> = samples.iter().map(|s| s.target).collect();

    let mut stats = SearchStats::default();
    let mut fits: Vec<Fit> = Vec::new();
    let mut readings: Vec<u64> = Vec::with_capacity(samples.len());

    'hyp: for h in space.hypotheses() {
        stats.hypotheses += 1;

        readings.clear();
        for s in samples.iter() {
            match extract(&s.bytes, &h) {
                Some(r) => readings.push(r),
                None => {
                    stats.infeasible += 1;
                    continue 'hyp;
                }
            }
        }

        stats.evaluated += 1;
        for (law, residuals) in evaluate(&readings, &targets, p) {
            fits.push(Fit {
                hypothesis: h,
                law,
                residuals,
            });
        }
    }

    Ok((fits, stats))
}
