use serde::{Deserialize, Serialize};

use crate::category::{MetricVector, WeightVector};
use crate::knowledge::{ConsensusAlgorithm, KnowledgeBase};
use crate::scoring::score;

use super::NOT_AVAILABLE;

/// Consensus algorithm chosen within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSelection {
    pub name: String,
    pub score: f64,
    pub metrics: MetricVector,
}

impl AlgorithmSelection {
    /// Sentinel for an unknown or empty group.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            name: NOT_AVAILABLE.to_string(),
            score: 0.0,
            metrics: MetricVector::zero(),
        }
    }

    /// True unless this is the [`unavailable`](Self::unavailable) sentinel.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.name != NOT_AVAILABLE
    }

    fn unscored(algorithm: &ConsensusAlgorithm) -> Self {
        Self {
            name: algorithm.name.clone(),
            score: 0.0,
            metrics: MetricVector::zero(),
        }
    }
}

/// Picks the best-scoring algorithm in `group`.
///
/// Never fails:
/// - unknown or empty group: [`AlgorithmSelection::unavailable`];
/// - an algorithm that cannot be scored is skipped;
/// - if none can be scored, the first algorithm with score 0 and zero metrics.
#[must_use]
pub fn select_algorithm(
    knowledge: &KnowledgeBase,
    group: &str,
    weights: &WeightVector,
) -> AlgorithmSelection {
    let Some((group_entry, first)) = knowledge
        .group(group)
        .and_then(|g| g.algorithms.first().map(|a| (g, a)))
    else {
        tracing::warn!(group, "consensus group unknown or empty");
        return AlgorithmSelection::unavailable();
    };

    let mut best: Option<AlgorithmSelection> = None;
    for algorithm in &group_entry.algorithms {
        let s = match score(&algorithm.name, &algorithm.metrics, weights) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(
                    group,
                    algorithm = %algorithm.name,
                    error = %e,
                    "skipping unscorable algorithm"
                );
                continue;
            }
        };
        if best.as_ref().map_or(true, |b| s > b.score) {
            best = Some(AlgorithmSelection {
                name: algorithm.name.clone(),
                score: s,
                metrics: algorithm.metrics.clone(),
            });
        }
    }

    match best {
        Some(selection) => {
            tracing::debug!(
                group,
                algorithm = %selection.name,
                score = selection.score,
                "selected consensus algorithm"
            );
            selection
        }
        None => {
            tracing::warn!(group, "no algorithm in group could be scored, using first");
            AlgorithmSelection::unscored(first)
        }
    }
}
