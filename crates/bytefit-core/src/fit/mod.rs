pub mod evaluate;
pub mod law;

use crate::hypothesis::params::Hypothesis;
use crate::fit::law::ScaleLaw;

/// A hypothesis that reproduced every target within tolerance, together
/// with the scaling law that did it. The canonical search output.
#[derive(Clone, Debug, PartialEq)]
pub struct Fit {
    pub hypothesis: Hypothesis,
    pub law: ScaleLaw,
    /// Signed per-sample error `law(reading) - target`, in input order.
    pub residuals: Vec<f64>,
}

impl Fit {
    pub fn max_abs_residual(&self) -> f64 {
        self.residuals.iter().fold(0.0f64, |m, r| m.max(r.abs()))
    }
}
