//! Random sampling from parameterized probability distributions.
//!
//! A [`Sample`] is drawn from one of three supported distributions (normal,
//! lognormal, or laplace) given a target mean, standard deviation, and sample
//! size, and records the empirical mean and standard deviation of what was
//! actually drawn.
//!
//! ```
//! use distsample::Sample;
//!
//! let sample = Sample::draw("normal", 10.0, 5.0, 1000)?;
//! assert_eq!(sample.values().len(), 1000);
//! println!("{sample}");
//! # Ok::<(), distsample::SampleError>(())
//! ```

pub mod distr;
pub mod errors;
mod sample;
mod stats;

pub use errors::{Result, SampleError};
pub use sample::{DistributionKind, Sample};
