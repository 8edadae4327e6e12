//! Weighted scoring of metric vectors.

use crate::category::{MetricVector, WeightVector};
use crate::error::ValidationError;

/// Weighted sum of `metrics` under `weights`.
///
/// Iterates the metric vector's categories in declaration order, so the
/// floating-point evaluation order is fixed and results are bit-for-bit
/// reproducible.
///
/// # Errors
///
/// Returns `ValidationError::NonFiniteScore` if any metric, weight, or the
/// accumulated score is NaN or infinite. `subject` names the scored item in
/// the error.
pub fn score(
    subject: &str,
    metrics: &MetricVector,
    weights: &WeightVector,
) -> Result<f64, ValidationError> {
    let mut total = 0.0;
    for (category, metric) in metrics.iter() {
        let contribution = metric * weights.get(category);
        if !contribution.is_finite() {
            return Err(ValidationError::NonFiniteScore {
                subject: subject.to_string(),
                category,
            });
        }
        total += contribution;
    }
    Ok(total)
}
