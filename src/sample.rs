use std::fmt;

use log::warn;
use rand::distr::Distribution;
use rand::{rng, Rng};

use crate::distr::{LaplaceDistribution, LogNormalDistribution, NormalDistribution};
use crate::errors::{Result, SampleError};
use crate::stats;

/// The distribution a sample was requested from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributionKind {
    Normal,
    LogNormal,
    Laplace,
    /// A tag that matched no supported distribution, kept verbatim.
    Unrecognized(String),
}

impl From<&str> for DistributionKind {
    fn from(tag: &str) -> Self {
        match tag {
            "normal" => DistributionKind::Normal,
            "lognormal" => DistributionKind::LogNormal,
            "laplace" => DistributionKind::Laplace,
            other => DistributionKind::Unrecognized(other.to_owned()),
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionKind::Normal => f.write_str("normal"),
            DistributionKind::LogNormal => f.write_str("lognormal"),
            DistributionKind::Laplace => f.write_str("laplace"),
            DistributionKind::Unrecognized(tag) => f.write_str(tag),
        }
    }
}

/// A drawn sample together with its summary statistics.
///
/// For a recognized kind the summary mean and standard deviation are computed
/// from the drawn values (Bessel-corrected, rounded to two decimals). For an
/// unrecognized kind nothing is drawn and the summary fields repeat the
/// requested inputs.
#[derive(Debug, Clone)]
pub struct Sample {
    kind: DistributionKind,
    requested_mean: f64,
    requested_std_dev: f64,
    mean: f64,
    std_dev: f64,
    size: usize,
    values: Vec<f64>,
}

impl Sample {
    /// Draws `size` variates of `kind` using the thread-local generator.
    pub fn draw(kind: &str, mean: f64, std_dev: f64, size: usize) -> Result<Sample> {
        let mut rng = rng();
        Sample::draw_with(&mut rng, kind, mean, std_dev, size)
    }

    /// Draws `size` variates of `kind` from the supplied generator.
    ///
    /// `mean` and `std_dev` are interpreted per distribution: the normal uses
    /// them directly, the lognormal applies them to the underlying normal of
    /// the variable's logarithm (so the sample's own mean will generally
    /// differ from `mean`), and the laplace treats `std_dev` as the target
    /// standard deviation of the drawn variable and derives its scale from it.
    ///
    /// An unrecognized `kind` does not fail: it logs a warning and produces a
    /// sample with no drawn values whose summary repeats the inputs.
    pub fn draw_with(
        rng: &mut impl Rng,
        kind: &str,
        mean: f64,
        std_dev: f64,
        size: usize,
    ) -> Result<Sample> {
        let kind = DistributionKind::from(kind);
        let values = match &kind {
            DistributionKind::Normal => {
                validate(std_dev, size)?;
                draw_values(rng, NormalDistribution::new(mean, std_dev), size)
            }
            DistributionKind::LogNormal => {
                validate(std_dev, size)?;
                draw_values(rng, LogNormalDistribution::new(mean, std_dev), size)
            }
            DistributionKind::Laplace => {
                validate(std_dev, size)?;
                draw_values(rng, LaplaceDistribution::with_std_dev(mean, std_dev), size)
            }
            DistributionKind::Unrecognized(tag) => {
                warn!(
                    "unrecognized distribution kind {tag:?}; expected \"normal\", \
                     \"lognormal\", or \"laplace\"; storing the inputs without drawing"
                );
                Vec::new()
            }
        };

        let (summary_mean, summary_std_dev) = if values.is_empty() {
            (mean, std_dev)
        } else {
            (
                stats::round2(stats::mean(&values)),
                stats::round2(stats::std_dev(&values)),
            )
        };

        Ok(Sample {
            kind,
            requested_mean: mean,
            requested_std_dev: std_dev,
            mean: summary_mean,
            std_dev: summary_std_dev,
            size,
            values,
        })
    }

    pub fn kind(&self) -> &DistributionKind {
        &self.kind
    }

    /// Summary mean: observed for a drawn sample, requested otherwise.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Summary standard deviation: observed for a drawn sample, requested
    /// otherwise.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn requested_mean(&self) -> f64 {
        self.requested_mean
    }

    pub fn requested_std_dev(&self) -> f64 {
        self.requested_std_dev
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The drawn variates, empty when the kind was unrecognized.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn is_drawn(&self) -> bool {
        !self.values.is_empty()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps the trailing .0 on whole-numbered statistics.
        write!(
            f,
            "Distribution: {}, Mean: {:?}, Standard Deviation: {:?}, Size: {}",
            self.kind, self.mean, self.std_dev, self.size
        )
    }
}

/// Equality covers kind, summary statistics, and size; the drawn values are
/// excluded, so two independently drawn samples with identical rounded
/// statistics compare equal.
impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.mean == other.mean
            && self.std_dev == other.std_dev
            && self.size == other.size
    }
}

fn validate(std_dev: f64, size: usize) -> Result<()> {
    if size < 2 {
        return Err(SampleError::InvalidSize { size });
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(SampleError::InvalidStdDev { std_dev });
    }
    Ok(())
}

fn draw_values<D: Distribution<f64>>(rng: &mut impl Rng, distribution: D, size: usize) -> Vec<f64> {
    (0..size).map(|_| distribution.sample(rng)).collect()
}
