pub mod error;
pub mod validate;

pub mod sample;
pub mod hypothesis;
pub mod extract;
pub mod fit;
pub mod search;

pub use crate::fit::evaluate::EvalParams;
pub use crate::fit::law::ScaleLaw;
pub use crate::fit::Fit;
pub use crate::hypothesis::params::{Endian, Hypothesis, KeySource, Width};
pub use crate::hypothesis::space::SearchSpace;
pub use crate::sample::Sample;
