//! Recommendation assembly.
//!
//! [`Advisor`] runs the full pipeline: weight adjustment, DLT selection,
//! consensus group routing, algorithm selection, and confidence. It holds
//! only read-only state, so one advisor can serve any number of threads.
//!
//! [`Advisor::recommend`] never fails. Empty answers produce the defined
//! empty result, and any pipeline error is logged and converted into the
//! same empty result. [`Advisor::try_recommend`] exposes the error instead.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::answer::AnswerSet;
use crate::category::{CategoryVector, MetricVector, WeightVector};
use crate::confidence::{estimate_confidence, ConfidenceComponents};
use crate::config::AdvisorConfig;
use crate::error::{AdvisorResult, ValidationError};
use crate::knowledge::KnowledgeBase;
use crate::selection::{
    select_algorithm, select_dlt, select_group, DltEvaluation, DltScore, NOT_AVAILABLE,
};
use crate::weights::{adjust_weights, default_base_weights};

/// The outcome of one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub dlt: String,
    pub dlt_type: String,
    pub consensus_group: String,
    pub consensus_group_explanation: String,
    pub consensus_algorithm: String,
    pub algorithm_metrics: MetricVector,
    pub algorithm_score: f64,
    /// Every DLT with its score, type, and metrics, in catalog order.
    pub evaluation_matrix: Vec<DltEvaluation>,
    /// Every DLT's weighted score, in catalog order.
    pub weighted_scores: Vec<DltScore>,
    /// True when `confidence_value` exceeds the configured threshold.
    pub confidence: bool,
    pub confidence_value: f64,
    pub confidence_components: ConfidenceComponents,
    /// Adjusted, normalized category weights.
    pub weights: WeightVector,
    /// Question texts that raised each category's weight.
    pub explanations: CategoryVector<Vec<String>>,
}

impl Recommendation {
    /// The "no recommendation available" result.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            dlt: NOT_AVAILABLE.to_string(),
            dlt_type: NOT_AVAILABLE.to_string(),
            consensus_group: NOT_AVAILABLE.to_string(),
            consensus_group_explanation: NOT_AVAILABLE.to_string(),
            consensus_algorithm: NOT_AVAILABLE.to_string(),
            algorithm_metrics: MetricVector::zero(),
            algorithm_score: 0.0,
            evaluation_matrix: Vec::new(),
            weighted_scores: Vec::new(),
            confidence: false,
            confidence_value: 0.0,
            confidence_components: ConfidenceComponents::default(),
            weights: default_base_weights(),
            explanations: CategoryVector::default(),
        }
    }

    /// True unless this is the empty result.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.dlt != NOT_AVAILABLE
    }
}

/// Recommendation engine over a knowledge base and configuration.
#[derive(Debug, Clone)]
pub struct Advisor {
    knowledge: Arc<KnowledgeBase>,
    config: AdvisorConfig,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Advisor {
    /// Advisor over the built-in catalog and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            knowledge: Arc::new(KnowledgeBase::builtin()),
            config: AdvisorConfig::default(),
        }
    }

    /// Advisor over a custom catalog and configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if either the knowledge base or the
    /// configuration is invalid.
    pub fn with_config(
        knowledge: Arc<KnowledgeBase>,
        config: AdvisorConfig,
    ) -> Result<Self, ValidationError> {
        knowledge.validate()?;
        config.validate()?;
        Ok(Self { knowledge, config })
    }

    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    #[must_use]
    pub const fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Recommends a DLT and consensus algorithm for `answers`.
    ///
    /// Never fails: errors degrade to the empty result and are logged.
    #[must_use]
    pub fn recommend(&self, answers: &AnswerSet) -> Recommendation {
        match self.try_recommend(answers) {
            Ok(recommendation) => recommendation,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    answers = answers.len(),
                    "recommendation failed, returning empty result"
                );
                self.empty()
            }
        }
    }

    /// Like [`recommend`](Self::recommend), but surfaces pipeline errors.
    ///
    /// Empty answers are not an error and yield the empty result.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::EmptyCatalog` when the knowledge base has no
    /// DLTs and `ValidationError::NonFiniteScore` when a DLT cannot be scored.
    pub fn try_recommend(&self, answers: &AnswerSet) -> AdvisorResult<Recommendation> {
        if answers.is_empty() {
            tracing::debug!("no answers, returning empty result");
            return Ok(self.empty());
        }

        let adjustment = adjust_weights(answers, &self.knowledge, &self.config.base_weights);
        let dlts = select_dlt(&self.knowledge, &adjustment.weights)?;
        let group = select_group(&dlts.best.dlt_type, answers, &self.knowledge);
        let algorithm = select_algorithm(&self.knowledge, &group.group, &adjustment.weights);
        let confidence = estimate_confidence(&dlts.scores(), answers, &self.config.confidence);
        let is_high = confidence.is_high(self.config.high_confidence_threshold);

        tracing::debug!(
            dlt = %dlts.best.name,
            group = %group.group,
            algorithm = %algorithm.name,
            confidence = confidence.value(),
            "recommendation assembled"
        );

        Ok(Recommendation {
            dlt: dlts.best.name,
            dlt_type: dlts.best.dlt_type,
            consensus_group: group.group,
            consensus_group_explanation: group.explanation,
            consensus_algorithm: algorithm.name,
            algorithm_metrics: algorithm.metrics,
            algorithm_score: algorithm.score,
            evaluation_matrix: dlts.evaluation_matrix,
            weighted_scores: dlts.weighted_scores,
            confidence: is_high,
            confidence_value: confidence.value(),
            confidence_components: confidence.components,
            weights: adjustment.weights,
            explanations: adjustment.explanations,
        })
    }

    fn empty(&self) -> Recommendation {
        Recommendation {
            weights: self.config.base_weights.clone(),
            ..Recommendation::empty()
        }
    }
}

/// Recommends using a shared advisor over the built-in catalog and defaults.
#[must_use]
pub fn recommend(answers: &AnswerSet) -> Recommendation {
    static ADVISOR: OnceLock<Advisor> = OnceLock::new();
    ADVISOR.get_or_init(Advisor::new).recommend(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;
    use crate::knowledge::{GROUP_HIGH_EFFICIENCY, GROUP_HIGH_SECURITY};

    fn answers(pairs: &[(&str, Answer)]) -> AnswerSet {
        pairs.iter().map(|(q, a)| (*q, *a)).collect()
    }

    #[test]
    fn test_advisor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Advisor>();
    }

    #[test]
    fn test_empty_answers_give_empty_result() {
        let rec = recommend(&AnswerSet::new());
        assert_eq!(rec, Recommendation::empty());
        assert_eq!(rec.dlt, NOT_AVAILABLE);
        assert!(!rec.confidence);
        assert_eq!(rec.confidence_value, 0.0);
        assert!(rec.weighted_scores.is_empty());
        assert!(!rec.is_available());
    }

    #[test]
    fn test_full_pipeline_populates_every_field() {
        let rec = recommend(&answers(&[
            ("privacy", Answer::Yes),
            ("network_security", Answer::Yes),
            ("scalability", Answer::No),
        ]));
        assert!(rec.is_available());
        assert_eq!(rec.dlt, "Private Blockchain");
        assert_eq!(rec.dlt_type, "private_permissioned");
        assert_eq!(rec.consensus_group, GROUP_HIGH_SECURITY);
        assert_ne!(rec.consensus_algorithm, NOT_AVAILABLE);
        assert!(rec.algorithm_score > 0.0);
        assert_eq!(rec.weighted_scores.len(), 5);
        assert_eq!(rec.evaluation_matrix.len(), 5);
        assert!((rec.weights.total() - 1.0).abs() < 1e-9);
        assert_eq!(rec.explanations.security.len(), 2);
        assert!((0.0..=1.0).contains(&rec.confidence_value));
        assert_eq!(rec.confidence, rec.confidence_value > 0.7);
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let input = answers(&[
            ("scalability", Answer::Yes),
            ("energy_efficiency", Answer::Yes),
            ("data_volume", Answer::Yes),
            ("privacy", Answer::No),
        ]);
        let first = recommend(&input);
        let second = recommend(&input);
        assert_eq!(first, second);
        assert_eq!(first.consensus_group, GROUP_HIGH_EFFICIENCY);
    }

    #[test]
    fn test_confidence_flag_uses_configured_threshold() {
        let input = answers(&[("privacy", Answer::Yes)]);
        let config = AdvisorConfig {
            high_confidence_threshold: 0.0,
            ..AdvisorConfig::default()
        };
        let advisor = Advisor::with_config(Arc::new(KnowledgeBase::builtin()), config).unwrap();
        let rec = advisor.recommend(&input);
        assert!(rec.confidence_value > 0.0);
        assert!(rec.confidence);
    }

    #[test]
    fn test_pipeline_error_degrades_to_empty_result() {
        let mut knowledge = KnowledgeBase::builtin();
        knowledge.dlts[0].metrics.scalability = f64::NAN;
        let advisor = Advisor {
            knowledge: Arc::new(knowledge),
            config: AdvisorConfig::default(),
        };
        let input = answers(&[("privacy", Answer::Yes)]);

        assert!(advisor.try_recommend(&input).is_err());
        let rec = advisor.recommend(&input);
        assert_eq!(rec, Recommendation::empty());
    }

    #[test]
    fn test_empty_catalog_degrades_to_empty_result() {
        let mut knowledge = KnowledgeBase::builtin();
        knowledge.dlts.clear();
        let advisor = Advisor {
            knowledge: Arc::new(knowledge),
            config: AdvisorConfig::default(),
        };
        let input = answers(&[("privacy", Answer::Yes)]);
        let err = advisor.try_recommend(&input).unwrap_err();
        assert!(err.is_execution());
        assert!(!advisor.recommend(&input).is_available());
    }

    #[test]
    fn test_with_config_rejects_invalid_inputs() {
        let mut config = AdvisorConfig::default();
        config.base_weights.security = 2.0;
        assert!(Advisor::with_config(Arc::new(KnowledgeBase::builtin()), config).is_err());

        let mut knowledge = KnowledgeBase::builtin();
        knowledge.groups.clear();
        assert!(Advisor::with_config(Arc::new(knowledge), AdvisorConfig::default()).is_err());
    }

    #[test]
    fn test_empty_result_reports_configured_base_weights() {
        let config = AdvisorConfig {
            base_weights: WeightVector::new(0.25, 0.25, 0.25, 0.25),
            ..AdvisorConfig::default()
        };
        let advisor = Advisor::with_config(Arc::new(KnowledgeBase::builtin()), config).unwrap();
        let rec = advisor.recommend(&AnswerSet::new());
        assert_eq!(rec.weights, WeightVector::new(0.25, 0.25, 0.25, 0.25));
        assert_eq!(rec.dlt, NOT_AVAILABLE);
    }
}
