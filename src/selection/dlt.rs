use serde::{Deserialize, Serialize};

use crate::category::{MetricVector, WeightVector};
use crate::error::{AdvisorResult, ExecutionError};
use crate::knowledge::{DltEntry, KnowledgeBase};
use crate::scoring::score;

/// Weighted score of one DLT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DltScore {
    pub name: String,
    pub score: f64,
}

/// One row of the evaluation matrix: score plus the inputs behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DltEvaluation {
    pub name: String,
    pub dlt_type: String,
    pub score: f64,
    pub metrics: MetricVector,
}

/// Result of [`select_dlt`]. Rows are in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct DltSelection {
    pub best: DltEntry,
    pub best_score: f64,
    pub weighted_scores: Vec<DltScore>,
    pub evaluation_matrix: Vec<DltEvaluation>,
}

impl DltSelection {
    /// Score of the DLT named `name`, if it was evaluated.
    #[must_use]
    pub fn score_of(&self, name: &str) -> Option<f64> {
        self.weighted_scores
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.score)
    }

    /// Scores in catalog order.
    #[must_use]
    pub fn scores(&self) -> Vec<f64> {
        self.weighted_scores.iter().map(|s| s.score).collect()
    }
}

/// Scores every DLT in the catalog and picks the best.
///
/// # Errors
///
/// - `ExecutionError::EmptyCatalog` if the knowledge base has no DLTs.
/// - `ValidationError::NonFiniteScore` if any entry cannot be scored.
pub fn select_dlt(
    knowledge: &KnowledgeBase,
    weights: &WeightVector,
) -> AdvisorResult<DltSelection> {
    let mut weighted_scores = Vec::with_capacity(knowledge.dlts.len());
    let mut evaluation_matrix = Vec::with_capacity(knowledge.dlts.len());
    let mut best: Option<(&DltEntry, f64)> = None;

    for entry in &knowledge.dlts {
        let s = score(&entry.name, &entry.metrics, weights)?;
        weighted_scores.push(DltScore {
            name: entry.name.clone(),
            score: s,
        });
        evaluation_matrix.push(DltEvaluation {
            name: entry.name.clone(),
            dlt_type: entry.dlt_type.clone(),
            score: s,
            metrics: entry.metrics.clone(),
        });

        // Strictly greater: the first-declared entry keeps ties.
        match best {
            Some((_, best_score)) if s <= best_score => {}
            _ => best = Some((entry, s)),
        }
    }

    let Some((best, best_score)) = best else {
        return Err(ExecutionError::EmptyCatalog.into());
    };

    tracing::debug!(dlt = %best.name, score = best_score, "selected DLT");

    Ok(DltSelection {
        best: best.clone(),
        best_score,
        weighted_scores,
        evaluation_matrix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use crate::weights::default_base_weights;

    fn entry(name: &str, metrics: MetricVector) -> DltEntry {
        DltEntry {
            name: name.to_string(),
            dlt_type: "private_permissioned".to_string(),
            metrics,
        }
    }

    #[test]
    fn test_builtin_defaults_pick_private_blockchain() {
        let kb = KnowledgeBase::builtin();
        let sel = select_dlt(&kb, &default_base_weights()).unwrap();
        assert_eq!(sel.best.name, "Private Blockchain");
        assert_eq!(sel.weighted_scores.len(), kb.dlts.len());
        assert_eq!(sel.evaluation_matrix.len(), kb.dlts.len());
        assert!((sel.best_score - 0.83).abs() < 1e-12);
        assert_eq!(sel.score_of("Private Blockchain"), Some(sel.best_score));
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let kb = KnowledgeBase::builtin();
        let sel = select_dlt(&kb, &default_base_weights()).unwrap();
        let names: Vec<&str> = sel.evaluation_matrix.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = kb.dlts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, expected);
        for (row, dlt) in sel.evaluation_matrix.iter().zip(&kb.dlts) {
            assert_eq!(row.dlt_type, dlt.dlt_type);
            assert_eq!(row.metrics, dlt.metrics);
        }
    }

    #[test]
    fn test_ties_resolve_to_first_declared() {
        let mut kb = KnowledgeBase::builtin();
        let same = MetricVector::new(0.5, 0.5, 0.5, 0.5);
        kb.dlts = vec![
            entry("Alpha", MetricVector::new(0.1, 0.1, 0.1, 0.1)),
            entry("Beta", same.clone()),
            entry("Gamma", same),
        ];
        for _ in 0..10 {
            let sel = select_dlt(&kb, &default_base_weights()).unwrap();
            assert_eq!(sel.best.name, "Beta");
        }
    }

    #[test]
    fn test_selection_is_deterministic() {
        let kb = KnowledgeBase::builtin();
        let weights = WeightVector::new(0.3, 0.3, 0.25, 0.15);
        let first = select_dlt(&kb, &weights).unwrap();
        for _ in 0..5 {
            assert_eq!(select_dlt(&kb, &weights).unwrap(), first);
        }
    }

    #[test]
    fn test_empty_catalog_is_reported() {
        let mut kb = KnowledgeBase::builtin();
        kb.dlts.clear();
        let err = select_dlt(&kb, &default_base_weights()).unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::Execution(ExecutionError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_malformed_metrics_fail_selection() {
        let mut kb = KnowledgeBase::builtin();
        kb.dlts[1].metrics.security = f64::INFINITY;
        let err = select_dlt(&kb, &default_base_weights()).unwrap_err();
        assert!(err.is_validation());
    }
}
