//! Storable summaries of recommendations.
//!
//! A [`RecommendationRecord`] is what the surrounding application persists
//! and shows in a user's history. Storing it is the caller's job; this
//! module only builds the value.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::Recommendation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationId(Uuid);

impl RecommendationId {
    /// Creates a new random recommendation ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecommendationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecommendationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of a recommendation for history and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub id: RecommendationId,
    pub dlt: String,
    pub consensus_algorithm: String,
    pub consensus_group: String,
    /// Healthcare scenario the questionnaire was answered for.
    pub scenario: String,
    pub username: String,
    pub confidence_value: f64,
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    /// Builds a record stamped with the current time.
    ///
    /// Returns `None` for the empty result: there is nothing to store.
    #[must_use]
    pub fn to_record(
        &self,
        scenario: impl Into<String>,
        username: impl Into<String>,
    ) -> Option<RecommendationRecord> {
        self.to_record_at(scenario, username, Utc::now())
    }

    /// Builds a record with an explicit timestamp.
    #[must_use]
    pub fn to_record_at(
        &self,
        scenario: impl Into<String>,
        username: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Option<RecommendationRecord> {
        if !self.is_available() {
            return None;
        }
        Some(RecommendationRecord {
            id: RecommendationId::new(),
            dlt: self.dlt.clone(),
            consensus_algorithm: self.consensus_algorithm.clone(),
            consensus_group: self.consensus_group.clone(),
            scenario: scenario.into(),
            username: username.into(),
            confidence_value: self.confidence_value,
            created_at,
        })
    }
}
