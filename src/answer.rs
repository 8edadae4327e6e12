//! Questionnaire answers.
//!
//! Answers live in a closed two-valued domain. Localized labels are
//! accepted when parsing raw input, but once parsed an answer is either
//! [`Answer::Yes`] or [`Answer::No`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// A single yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    const YES_LABELS: [&'static str; 7] = ["yes", "y", "true", "ja", "oui", "si", "sí"];
    const NO_LABELS: [&'static str; 5] = ["no", "n", "false", "nein", "non"];

    /// Parses a (possibly localized) label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        if Self::YES_LABELS.contains(&normalized.as_str()) {
            Some(Self::Yes)
        } else if Self::NO_LABELS.contains(&normalized.as_str()) {
            Some(Self::No)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_label(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("'{raw}' is not a yes/no answer")))
    }
}

/// Answers for one completed questionnaire, keyed by question id.
///
/// Ordered by question id so iteration (and serialization) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, Answer>);

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses raw `(question, label)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAnswer` for the first label that is
    /// not a recognized yes/no value.
    pub fn from_labels<I, K, V>(raw: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut answers = BTreeMap::new();
        for (question, label) in raw {
            let question = question.into();
            let Some(answer) = Answer::from_label(label.as_ref()) else {
                return Err(ValidationError::InvalidAnswer {
                    question,
                    label: label.as_ref().to_string(),
                });
            };
            answers.insert(question, answer);
        }
        Ok(Self(answers))
    }

    /// Returns a copy with `question` set to `answer`.
    #[must_use]
    pub fn with(mut self, question: impl Into<String>, answer: Answer) -> Self {
        self.0.insert(question.into(), answer);
        self
    }

    #[must_use]
    pub fn get(&self, question: &str) -> Option<Answer> {
        self.0.get(question).copied()
    }

    /// True only when `question` was answered Yes. Missing questions are not Yes.
    #[must_use]
    pub fn is_yes(&self, question: &str) -> bool {
        self.get(question).is_some_and(Answer::is_yes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn yes_count(&self) -> usize {
        self.0.values().filter(|a| a.is_yes()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Answer)> + '_ {
        self.0.iter().map(|(q, a)| (q.as_str(), *a))
    }
}

impl<K: Into<String>> FromIterator<(K, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, Answer)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(q, a)| (q.into(), a)).collect())
    }
}
