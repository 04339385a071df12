//! Cross-Axis Correlation

use crate::error::FeatureError;
use crate::statistics::Moments;

/// Pearson correlation between two aligned series, reusing their moments.
///
/// Covariance uses the population divisor N while the standard deviations in
/// `mx` and `my` carry the sample divisor N-1, so two perfectly co-linear
/// series score `(N-1)/N` rather than 1. A zero standard deviation yields a
/// non-finite result.
pub fn pearson_correlation(
    x: &[f64],
    y: &[f64],
    mx: &Moments,
    my: &Moments,
) -> Result<f64, FeatureError> {
    if x.len() != y.len() {
        return Err(FeatureError::SeriesLength {
            left: x.len(),
            right: y.len(),
        });
    }

    let covariance = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| (a - mx.mean) * (b - my.mean))
        .sum::<f64>()
        / x.len() as f64;

    let (sx, sy) = (mx.std_dev, my.std_dev);
    Ok(covariance / (sx * sx * sy * sy).sqrt())
}
