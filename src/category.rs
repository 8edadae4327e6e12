//! Evaluation categories and per-category vectors.
//!
//! There are exactly four categories. Every category-keyed value in the
//! crate is a [`CategoryVector`], which is total over all four, so a
//! missing category cannot be represented.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four fixed evaluation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Security,
    Scalability,
    EnergyEfficiency,
    Governance,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Security,
        Self::Scalability,
        Self::EnergyEfficiency,
        Self::Governance,
    ];

    /// Returns the stable snake_case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Scalability => "scalability",
            Self::EnergyEfficiency => "energy_efficiency",
            Self::Governance => "governance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value for each of the four categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryVector<T> {
    pub security: T,
    pub scalability: T,
    pub energy_efficiency: T,
    pub governance: T,
}

/// Per-category metric scores in [0, 1] for a DLT or consensus algorithm.
pub type MetricVector = CategoryVector<f64>;

/// Per-category importance weights. Normalized weights sum to 1.0.
pub type WeightVector = CategoryVector<f64>;

impl<T> CategoryVector<T> {
    /// Builds a vector from values given in [`Category::ALL`] order.
    pub fn new(security: T, scalability: T, energy_efficiency: T, governance: T) -> Self {
        Self {
            security,
            scalability,
            energy_efficiency,
            governance,
        }
    }

    /// Builds a vector by evaluating `f` once per category, in declaration order.
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            security: f(Category::Security),
            scalability: f(Category::Scalability),
            energy_efficiency: f(Category::EnergyEfficiency),
            governance: f(Category::Governance),
        }
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> &T {
        match category {
            Category::Security => &self.security,
            Category::Scalability => &self.scalability,
            Category::EnergyEfficiency => &self.energy_efficiency,
            Category::Governance => &self.governance,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Security => &mut self.security,
            Category::Scalability => &mut self.scalability,
            Category::EnergyEfficiency => &mut self.energy_efficiency,
            Category::Governance => &mut self.governance,
        }
    }

    /// Iterates `(category, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Applies `f` to every value, keeping the category layout.
    pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> CategoryVector<U> {
        CategoryVector::from_fn(|c| f(c, self.get(c)))
    }
}

impl CategoryVector<f64> {
    /// The all-zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            security: 0.0,
            scalability: 0.0,
            energy_efficiency: 0.0,
            governance: 0.0,
        }
    }

    /// Sum of the four values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| *v).sum()
    }
}
