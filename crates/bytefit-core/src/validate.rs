use crate::error::{BfError, Result};
use crate::fit::evaluate::EvalParams;
use crate::hypothesis::space::SearchSpace;
use crate::sample::Sample;

pub fn validate_search(samples: &[Sample], space: &SearchSpace, p: &EvalParams) -> Result<()> {
    if samples.is_empty() {
        return Err(BfError::Validation("at least one sample required".into()));
    }
    for s in samples.iter() {
        if s.bytes.is_empty() {
            return Err(BfError::Validation(format!(
                "sample {:?} has an empty buffer",
                s.label
            )));
        }
    }

    if space.widths.is_empty() {
        return Err(BfError::Validation("width set must be non-empty".into()));
    }
    if space.endians.is_empty() {
        return Err(BfError::Validation("endian set must be non-empty".into()));
    }
    if space.masks.is_empty() {
        return Err(BfError::Validation("mask set must be non-empty".into()));
    }

    if !(p.tol_multiplicative > 0.0) {
        return Err(BfError::Validation(
            "multiplicative tolerance must be > 0".into(),
        ));
    }
    if !(p.tol_affine > 0.0) {
        return Err(BfError::Validation("affine tolerance must be > 0".into()));
    }

    if let Some(factors) = p.factors.as_deref() {
        if factors.is_empty() {
            return Err(BfError::Validation(
                "candidate factor list must be non-empty".into(),
            ));
        }
        for &f in factors {
            if !f.is_finite() || f == 0.0 {
                return Err(BfError::Validation(format!(
                    "candidate factor must be finite and non-zero, got {}",
                    f
                )));
            }
        }
    }

    Ok(())
}
