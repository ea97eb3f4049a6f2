use std::f64::consts::PI;
use rand::distr::Distribution;
use rand::Rng;

/// Normal distribution sampled with the Box-Muller transform.
pub struct NormalDistribution {
    mean: f64,
    std_dev: f64,
}

impl NormalDistribution {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        NormalDistribution { mean, std_dev }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Distribution<f64> for NormalDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // u1 must stay strictly positive so ln never sees 0.
        let u1: f64 = rng.random_range(f64::EPSILON..1.0);
        let u2: f64 = rng.random();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        self.mean + z0 * self.std_dev
    }
}

/// Lognormal distribution, parameterized by the mean and standard deviation
/// of the underlying normal of the variable's logarithm.
pub struct LogNormalDistribution {
    normal: NormalDistribution,
}

impl LogNormalDistribution {
    pub fn new(mu: f64, sigma: f64) -> Self {
        LogNormalDistribution {
            normal: NormalDistribution::new(mu, sigma),
        }
    }

    /// Shape parameter of the conventional shape/scale form, equal to sigma.
    pub fn shape(&self) -> f64 {
        self.normal.std_dev()
    }

    /// Scale parameter of the conventional shape/scale form, equal to e^mu.
    pub fn scale(&self) -> f64 {
        self.normal.mean().exp()
    }
}

impl Distribution<f64> for LogNormalDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.normal.sample(rng).exp()
    }
}

/// Laplace distribution sampled by inverting its CDF.
pub struct LaplaceDistribution {
    location: f64,
    scale: f64,
}

impl LaplaceDistribution {
    pub fn new(location: f64, scale: f64) -> Self {
        LaplaceDistribution { location, scale }
    }

    /// Builds the distribution whose own standard deviation is `std_dev`,
    /// deriving the scale b from Var = 2b^2.
    pub fn with_std_dev(location: f64, std_dev: f64) -> Self {
        let scale = (std_dev * std_dev / 2.0).sqrt();
        LaplaceDistribution { location, scale }
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution<f64> for LaplaceDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // u is kept strictly inside (-0.5, 0.5) so ln never sees 0.
        let u = rng.random_range(f64::EPSILON..1.0) - 0.5;
        self.location - self.scale * u.signum() * (1.0 - 2.0 * u.abs()).ln()
    }
}
