//! Declared dependency of an installed package

use super::ConstraintGroup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A requirement one package declares on another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Name of the required package (never empty)
    pub name: String,
    /// Version constraint; None means any version is accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<ConstraintGroup>,
}

impl Dependency {
    /// Creates a new dependency. The caller guarantees `name` is not empty;
    /// use [`Dependency::named`] for untrusted input.
    pub fn new(name: impl Into<String>, constraint: Option<ConstraintGroup>) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }

    /// Creates a dependency, or None if `name` is empty or blank
    pub fn named(name: &str, constraint: Option<ConstraintGroup>) -> Option<Self> {
        let name = name.trim();
        (!name.is_empty()).then(|| Self::new(name, constraint))
    }

    /// Creates a dependency that accepts any version
    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Returns true if this dependency restricts the version
    pub fn is_constrained(&self) -> bool {
        self.constraint.is_some()
    }

    /// Returns true if the installed version is acceptable.
    /// An unconstrained dependency accepts every version.
    pub fn accepts(&self, installed_version: &str) -> bool {
        self.constraint
            .as_ref()
            .is_none_or(|group| group.is_satisfied_by(installed_version))
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(group) => write!(f, "{} {}", self.name, group),
            None => write!(f, "{}", self.name),
        }
    }
}
