// crates/bytefit-core/src/fit/evaluate.rs

use crate::fit::law::ScaleLaw;

/// Evaluation parameters. Tolerances are absolute, in the target's domain.
///
/// The affine band defaults tighter than the multiplicative one: a law with
/// more free parameters is held to a stricter residual bound.
#[derive(Clone, Debug)]
pub struct EvalParams {
    pub tol_multiplicative: f64,
    pub tol_affine: f64,
    /// Optional candidate factor list. When present, a multiplicative fit
    /// must use one of these factors (first listed match wins) instead of
    /// deriving the factor from the first sample.
    pub factors: Option<Vec<f64>>,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            tol_multiplicative: 0.5,
            tol_affine: 0.2,
            factors: None,
        }
    }
}

/// Test both law classes independently against one aligned batch of
/// readings. Order across samples is input order, so residuals are
/// reproducible. A law is returned only if every sample satisfies it.
pub fn evaluate(readings: &[u64], targets: &[f64], p: &EvalParams) -> Vec<(ScaleLaw, Vec<f64>)> {
    let mut out = Vec::new();
    if let Some(hit) = fit_multiplicative(readings, targets, p) {
        out.push(hit);
    }
    if let Some(hit) = fit_affine(readings, targets, p.tol_affine) {
        out.push(hit);
    }
    out
}

/// Pure multiplicative law: target = factor * reading.
///
/// Without a candidate list the factor is derived from the first sample
/// (skipped when its reading is 0 — no determinate law exists).
pub fn fit_multiplicative(
    readings: &[u64],
    targets: &[f64],
    p: &EvalParams,
) -> Option<(ScaleLaw, Vec<f64>)> {
    if readings.is_empty() || readings.len() != targets.len() {
        return None;
    }

    if let Some(factors) = p.factors.as_deref() {
        for &factor in factors {
            if let Some(residuals) =
                check_factor(readings, targets, factor, p.tol_multiplicative)
            {
                return Some((ScaleLaw::Multiplicative { factor }, residuals));
            }
        }
        return None;
    }

    if readings[0] == 0 {
        return None;
    }
    let factor = targets[0] / readings[0] as f64;
    let residuals = check_factor(readings, targets, factor, p.tol_multiplicative)?;
    Some((ScaleLaw::Multiplicative { factor }, residuals))
}

/// Affine law: target = slope * reading + intercept, solved from the first
/// two samples and verified against the rest.
///
/// Requires at least three samples: with only two, the two-point line has
/// nothing left to check and every pair of distinct readings would fit
/// vacuously. Equal first readings leave the slope undefined; skipped.
pub fn fit_affine(readings: &[u64], targets: &[f64], tol: f64) -> Option<(ScaleLaw, Vec<f64>)> {
    if readings.len() < 3 || readings.len() != targets.len() {
        return None;
    }
    if readings[0] == readings[1] {
        return None;
    }

    let r0 = readings[0] as f64;
    let r1 = readings[1] as f64;
    let slope = (targets[0] - targets[1]) / (r0 - r1);
    let intercept = targets[0] - slope * r0;

    let law = ScaleLaw::Affine { slope, intercept };
    let mut residuals = Vec::with_capacity(readings.len());
    for (&r, &t) in readings.iter().zip(targets.iter()) {
        let resid = law.apply(r) - t;
        if resid.abs() > tol {
            return None;
        }
        residuals.push(resid);
    }
    Some((law, residuals))
}

fn check_factor(readings: &[u64], targets: &[f64], factor: f64, tol: f64) -> Option<Vec<f64>> {
    let mut residuals = Vec::with_capacity(readings.len());
    for (&r, &t) in readings.iter().zip(targets.iter()) {
        let resid = factor * r as f64 - t;
        if resid.abs() > tol {
            return None;
        }
        residuals.push(resid);
    }
    Some(residuals)
}
