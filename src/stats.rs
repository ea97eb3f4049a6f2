pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Bessel-corrected sample standard deviation. Callers guarantee at least
/// two values.
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let sum_sq = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_of_known_values() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn std_dev_uses_bessel_correction() {
        assert_relative_eq!(std_dev(&[1.0, 2.0, 3.0, 4.0]), (5.0f64 / 3.0).sqrt());
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(9.876), 9.88);
        assert_eq!(round2(-1.239), -1.24);
    }
}
