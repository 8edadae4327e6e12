//! Heuristic confidence for a recommendation.
//!
//! Confidence blends three signals:
//! - separation: how far the best DLT score sits above the mean;
//! - consistency: how tightly the scores cluster relative to the best;
//! - answer ratio: the share of questions answered Yes.
//!
//! The value is advisory. Any degenerate input (no scores, a single score,
//! non-finite intermediates) produces exactly 0.0 instead of an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::answer::AnswerSet;

/// Weights of the three confidence components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceCoefficients {
    pub separation: f64,
    pub consistency: f64,
    pub answer_ratio: f64,
}

impl Default for ConfidenceCoefficients {
    fn default() -> Self {
        Self {
            separation: 0.40,
            consistency: 0.35,
            answer_ratio: 0.25,
        }
    }
}

/// The individual signals behind a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfidenceComponents {
    pub separation: f64,
    pub consistency: f64,
    pub answer_ratio: f64,
}

/// A confidence value in [0.0, 1.0] with its components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfidenceEstimate {
    value: f64,
    pub components: ConfidenceComponents,
}

impl ConfidenceEstimate {
    /// Zero confidence, used for every degenerate input.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// True when the value is strictly above `threshold`.
    #[must_use]
    pub fn is_high(&self, threshold: f64) -> bool {
        self.value > threshold
    }
}

#[derive(Debug, Error)]
enum StatisticsError {
    #[error("need at least 2 scores, got {0}")]
    TooFewSamples(usize),

    #[error("non-finite intermediate value in {0}")]
    NonFinite(&'static str),
}

/// Estimates confidence from the per-DLT weighted scores and the answers.
///
/// Returns [`ConfidenceEstimate::zero`] when the statistics are undefined.
#[must_use]
pub fn estimate_confidence(
    scores: &[f64],
    answers: &AnswerSet,
    coefficients: &ConfidenceCoefficients,
) -> ConfidenceEstimate {
    match try_estimate(scores, answers, coefficients) {
        Ok(estimate) => estimate,
        Err(e) => {
            tracing::debug!(error = %e, "confidence degenerate, defaulting to 0.0");
            ConfidenceEstimate::zero()
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn try_estimate(
    scores: &[f64],
    answers: &AnswerSet,
    coefficients: &ConfidenceCoefficients,
) -> Result<ConfidenceEstimate, StatisticsError> {
    let n = scores.len();
    if n < 2 {
        return Err(StatisticsError::TooFewSamples(n));
    }
    if scores.iter().any(|s| !s.is_finite()) {
        return Err(StatisticsError::NonFinite("scores"));
    }

    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = scores.iter().sum::<f64>() / n as f64;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let stdev = variance.sqrt();

    let (separation, consistency) = if max > 0.0 {
        ((max - mean) / max, 1.0 - stdev / max)
    } else {
        (0.0, 0.0)
    };

    let answer_ratio = if answers.is_empty() {
        0.0
    } else {
        answers.yes_count() as f64 / answers.len() as f64
    };

    let value = coefficients.separation * separation
        + coefficients.consistency * consistency
        + coefficients.answer_ratio * answer_ratio;
    if !value.is_finite() {
        return Err(StatisticsError::NonFinite("confidence"));
    }

    Ok(ConfidenceEstimate {
        value: value.clamp(0.0, 1.0),
        components: ConfidenceComponents {
            separation,
            consistency,
            answer_ratio,
        },
    })
}
