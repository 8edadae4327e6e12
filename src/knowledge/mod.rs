//! Static knowledge base: DLT catalog, consensus groups, weighting rules,
//! and question texts.
//!
//! The knowledge base is read-only once constructed. Catalog order is
//! significant: selection ties resolve to the entry declared first, so
//! `dlts` and each group's `algorithms` are kept as ordered vectors.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::{Category, MetricVector};
use crate::error::{AdvisorResult, ValidationError};

pub use builtin::{
    GROUP_DECENTRALIZED_TRUST, GROUP_HIGH_EFFICIENCY, GROUP_HIGH_SECURITY,
    GROUP_SCALABILITY_GOVERNANCE,
};

/// A DLT type in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DltEntry {
    /// Display name, unique within the catalog.
    pub name: String,
    /// Type tag used to look up the default consensus group.
    pub dlt_type: String,
    pub metrics: MetricVector,
}

/// A consensus algorithm with its baseline metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusAlgorithm {
    pub name: String,
    pub metrics: MetricVector,
}

/// A named family of consensus algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusGroup {
    pub name: String,
    /// Candidates in declaration order.
    pub algorithms: Vec<ConsensusAlgorithm>,
}

/// Adds `increment` to `category` when `question` is answered Yes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRule {
    pub category: Category,
    pub question: String,
    pub increment: f64,
}

/// Default consensus group for a DLT type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefault {
    pub dlt_type: String,
    pub group: String,
}

/// Question id and the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
}

/// The full read-only dataset the engine scores against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub dlts: Vec<DltEntry>,
    pub groups: Vec<ConsensusGroup>,
    pub weight_rules: Vec<WeightRule>,
    pub type_defaults: Vec<TypeDefault>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// Number of algorithms every consensus group must declare.
    pub const ALGORITHMS_PER_GROUP: usize = 2;

    /// The built-in healthcare catalog.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::knowledge_base()
    }

    /// Parses and validates a knowledge base from JSON.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::Serialization` for malformed JSON and
    /// `ValidationError::InvalidKnowledgeBase` when a catalog invariant fails.
    pub fn from_json(json: &str) -> AdvisorResult<Self> {
        let kb: Self = serde_json::from_str(json)?;
        kb.validate()?;
        Ok(kb)
    }

    /// Reads and validates a knowledge base from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::Io` if the file cannot be read, otherwise the
    /// errors of [`from_json`](Self::from_json).
    pub fn from_path(path: impl AsRef<Path>) -> AdvisorResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&ConsensusGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    #[must_use]
    pub fn dlt(&self, name: &str) -> Option<&DltEntry> {
        self.dlts.iter().find(|d| d.name == name)
    }

    /// Default group name for a DLT type tag, if the type is known.
    #[must_use]
    pub fn default_group_for(&self, dlt_type: &str) -> Option<&str> {
        self.type_defaults
            .iter()
            .find(|d| d.dlt_type == dlt_type)
            .map(|d| d.group.as_str())
    }

    /// Display text for a question, falling back to the id itself.
    #[must_use]
    pub fn question_text<'a>(&'a self, id: &'a str) -> &'a str {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .map_or(id, |q| q.text.as_str())
    }

    /// Validates catalog invariants.
    ///
    /// - At least one DLT, with unique names and finite metrics in [0, 1].
    /// - Unique group names; every group has exactly two algorithms.
    /// - Every DLT type has exactly one default group, and every default group exists.
    /// - Weight rule increments are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidKnowledgeBase` naming the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dlts.is_empty() {
            return Err(invalid("DLT catalog must not be empty"));
        }

        let mut dlt_names = HashSet::with_capacity(self.dlts.len());
        for dlt in &self.dlts {
            if !dlt_names.insert(dlt.name.as_str()) {
                return Err(invalid(format!("duplicate DLT '{}'", dlt.name)));
            }
            validate_metrics(&dlt.name, &dlt.metrics)?;
            if self.default_group_for(&dlt.dlt_type).is_none() {
                return Err(invalid(format!(
                    "DLT type '{}' has no default consensus group",
                    dlt.dlt_type
                )));
            }
        }

        let mut group_names = HashSet::with_capacity(self.groups.len());
        for group in &self.groups {
            if !group_names.insert(group.name.as_str()) {
                return Err(invalid(format!("duplicate consensus group '{}'", group.name)));
            }
            if group.algorithms.len() != Self::ALGORITHMS_PER_GROUP {
                return Err(invalid(format!(
                    "consensus group '{}' has {} algorithms, expected {}",
                    group.name,
                    group.algorithms.len(),
                    Self::ALGORITHMS_PER_GROUP
                )));
            }
            for algorithm in &group.algorithms {
                validate_metrics(&algorithm.name, &algorithm.metrics)?;
            }
        }

        let mut default_types = HashSet::with_capacity(self.type_defaults.len());
        for default in &self.type_defaults {
            if !default_types.insert(default.dlt_type.as_str()) {
                return Err(invalid(format!(
                    "duplicate default group for DLT type '{}'",
                    default.dlt_type
                )));
            }
            if !group_names.contains(default.group.as_str()) {
                return Err(invalid(format!(
                    "DLT type '{}' defaults to unknown group '{}'",
                    default.dlt_type, default.group
                )));
            }
        }

        for rule in &self.weight_rules {
            if !rule.increment.is_finite() || rule.increment < 0.0 {
                return Err(invalid(format!(
                    "weight rule for '{}' has invalid increment {}",
                    rule.question, rule.increment
                )));
            }
        }

        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidKnowledgeBase {
        reason: reason.into(),
    }
}

fn validate_metrics(subject: &str, metrics: &MetricVector) -> Result<(), ValidationError> {
    for (category, value) in metrics.iter() {
        if !value.is_finite() || !(0.0..=1.0).contains(value) {
            return Err(invalid(format!(
                "{subject}: {category} metric {value} is outside [0, 1]"
            )));
        }
    }
    Ok(())
}
