//! # dlt-advisor - DLT and consensus recommendations for healthcare
//!
//! A deterministic multi-criteria scoring engine that turns questionnaire
//! answers into a distributed-ledger recommendation.
//!
//! ## Core Concepts
//!
//! - **Answers**: yes/no responses keyed by question id
//! - **Weights**: normalized importance of security, scalability, energy efficiency, and governance
//! - **Knowledge base**: read-only catalog of DLT types and consensus groups with metric scores
//! - **Recommendation**: best DLT, consensus group and algorithm, plus a heuristic confidence
//!
//! ## Usage
//!
//! ```
//! use dlt_advisor::{recommend, Answer, AnswerSet};
//!
//! let answers = AnswerSet::new()
//!     .with("privacy", Answer::Yes)
//!     .with("network_security", Answer::Yes);
//!
//! let rec = recommend(&answers);
//! assert_eq!(rec.consensus_group, "High Security & Control");
//! assert!((rec.weights.total() - 1.0).abs() < 1e-9);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod answer;
pub mod category;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod record;
pub mod scoring;
pub mod selection;
pub mod weights;

// Re-export primary types at crate root for convenience
pub use answer::{Answer, AnswerSet};
pub use category::{Category, CategoryVector, MetricVector, WeightVector};
pub use confidence::{
	estimate_confidence, ConfidenceCoefficients, ConfidenceComponents, ConfidenceEstimate,
};
pub use config::AdvisorConfig;
pub use engine::{recommend, Advisor, Recommendation};
pub use error::{AdvisorError, AdvisorResult, ExecutionError, ValidationError};
pub use knowledge::{
	ConsensusAlgorithm, ConsensusGroup, DltEntry, KnowledgeBase, Question, TypeDefault,
	WeightRule,
};
pub use record::{RecommendationId, RecommendationRecord};
pub use scoring::score;
pub use selection::{
	select_algorithm, select_dlt, select_group, AlgorithmSelection, DltEvaluation, DltScore,
	DltSelection, GroupRule, GroupSelection, GROUP_RULES, NOT_AVAILABLE,
};
pub use weights::{adjust_weights, default_base_weights, WeightAdjustment};
