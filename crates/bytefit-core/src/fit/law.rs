use std::fmt;

/// Scaling law mapping an extracted reading to the target domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleLaw {
    /// target = factor * reading
    Multiplicative { factor: f64 },
    /// target = slope * reading + intercept
    Affine { slope: f64, intercept: f64 },
}

impl ScaleLaw {
    pub fn apply(&self, reading: u64) -> f64 {
        match *self {
            ScaleLaw::Multiplicative { factor } => factor * reading as f64,
            ScaleLaw::Affine { slope, intercept } => slope * reading as f64 + intercept,
        }
    }
}

impl fmt::Display for ScaleLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ScaleLaw::Multiplicative { factor } => write!(f, "mult factor={:.6}", factor),
            ScaleLaw::Affine { slope, intercept } => {
                write!(f, "affine slope={:.6} intercept={:.4}", slope, intercept)
            }
        }
    }
}
