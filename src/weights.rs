//! Answer-driven category weight adjustment.
//!
//! Each Yes answer that matches a weighting rule bumps the rule's category
//! by its increment. The bumped weights are then normalized back to a sum
//! of 1.0, so answers shift relative importance rather than absolute size.

use serde::{Deserialize, Serialize};

use crate::answer::AnswerSet;
use crate::category::{CategoryVector, WeightVector};
use crate::knowledge::KnowledgeBase;

/// Category weights before adjustment: security 0.40, scalability 0.25,
/// energy efficiency 0.20, governance 0.15.
#[must_use]
pub const fn default_base_weights() -> WeightVector {
    WeightVector {
        security: 0.40,
        scalability: 0.25,
        energy_efficiency: 0.20,
        governance: 0.15,
    }
}

/// Outcome of [`adjust_weights`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightAdjustment {
    /// Weights after increments, before normalization.
    pub raw: WeightVector,
    /// Normalized weights (sum to 1.0).
    pub weights: WeightVector,
    /// Question texts that raised each category, in rule order.
    pub explanations: CategoryVector<Vec<String>>,
}

/// Adjusts `base` weights from `answers` using the knowledge base's weighting rules.
///
/// Questions missing from `answers` count as not Yes. `base` is expected to
/// hold strictly positive weights (see `AdvisorConfig::validate`); under that
/// precondition the result is strictly positive and sums to 1.0.
#[must_use]
pub fn adjust_weights(
    answers: &AnswerSet,
    knowledge: &KnowledgeBase,
    base: &WeightVector,
) -> WeightAdjustment {
    let mut raw = base.clone();
    let mut explanations: CategoryVector<Vec<String>> = CategoryVector::default();

    for rule in &knowledge.weight_rules {
        if answers.is_yes(&rule.question) {
            *raw.get_mut(rule.category) += rule.increment;
            explanations
                .get_mut(rule.category)
                .push(knowledge.question_text(&rule.question).to_string());
        }
    }

    let total = raw.total();
    let weights = raw.map(|_, w| w / total);

    WeightAdjustment {
        raw,
        weights,
        explanations,
    }
}
