//! Engine configuration.
//!
//! Every field has a default matching the heuristic constants the engine
//! was calibrated with, so an empty JSON object is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::WeightVector;
use crate::confidence::ConfidenceCoefficients;
use crate::error::{AdvisorResult, ValidationError};
use crate::weights::default_base_weights;

/// Tolerance for weight and coefficient sums compared against 1.0.
const SUM_TOLERANCE: f64 = 1e-6;

/// Tunable parameters of the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Category weights before any answer-driven adjustment.
    pub base_weights: WeightVector,
    /// Blend of the confidence components.
    pub confidence: ConfidenceCoefficients,
    /// Confidence values strictly above this are reported as high.
    pub high_confidence_threshold: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            base_weights: default_base_weights(),
            confidence: ConfidenceCoefficients::default(),
            high_confidence_threshold: 0.7,
        }
    }
}

impl AdvisorConfig {
    /// Validate configuration.
    ///
    /// This must be called before constructing an `Advisor` from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidConfig` when a base weight is not
    /// positive, the base weights do not sum to 1.0, a confidence coefficient
    /// is negative or the coefficients sum above 1.0, or the threshold is
    /// outside [0, 1].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (category, weight) in self.base_weights.iter() {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(ValidationError::InvalidConfig {
                    reason: format!("base weight for {category} must be finite and > 0"),
                });
            }
        }
        let total = self.base_weights.total();
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(ValidationError::InvalidConfig {
                reason: format!("base weights must sum to 1.0, got {total}"),
            });
        }

        let c = &self.confidence;
        for (name, value) in [
            ("separation", c.separation),
            ("consistency", c.consistency),
            ("answer_ratio", c.answer_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidConfig {
                    reason: format!("confidence coefficient '{name}' must be finite and >= 0"),
                });
            }
        }
        let blend = c.separation + c.consistency + c.answer_ratio;
        if blend > 1.0 + SUM_TOLERANCE {
            return Err(ValidationError::InvalidConfig {
                reason: format!("confidence coefficients must sum to at most 1.0, got {blend}"),
            });
        }

        if !(0.0..=1.0).contains(&self.high_confidence_threshold) {
            return Err(ValidationError::InvalidConfig {
                reason: "high_confidence_threshold must be within [0, 1]".to_string(),
            });
        }
        Ok(())
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::Serialization` for malformed JSON, otherwise the
    /// errors of [`validate`](Self::validate).
    pub fn from_json(json: &str) -> AdvisorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::Io` if the file cannot be read, otherwise the
    /// errors of [`from_json`](Self::from_json).
    pub fn from_path(path: impl AsRef<Path>) -> AdvisorResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
