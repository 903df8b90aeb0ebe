//! Conflict report types produced by the audit

use super::ConstraintGroup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Another package that also requires the violated package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    /// Name of the other requiring package
    pub package: String,
    /// Installed version of the other requiring package
    pub version: String,
    /// Its constraint on the violated package; None means "any"
    pub constraint: Option<ConstraintGroup>,
}

impl Attribution {
    /// Creates a new attribution
    pub fn new(
        package: impl Into<String>,
        version: impl Into<String>,
        constraint: Option<ConstraintGroup>,
    ) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
            constraint,
        }
    }

    /// Constraint text for display, `any` when unconstrained
    pub fn constraint_display(&self) -> String {
        self.constraint
            .as_ref()
            .map_or_else(|| "any".to_string(), ToString::to_string)
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "also from: {} ver {} requiring {}",
            self.package,
            self.version,
            self.constraint_display()
        )
    }
}

/// An installed package whose version fails a constraint declared by another package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// The depended-upon package
    pub package: String,
    /// Its installed version
    pub installed_version: String,
    /// The package declaring the failed constraint
    pub required_by: String,
    /// Installed version of the requiring package
    pub required_by_version: String,
    /// The failed constraint
    pub constraint: ConstraintGroup,
    /// Every other package that also requires `package`
    pub also_required_by: Vec<Attribution>,
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FAILED: {} ver {} installed, {} ver {} requires {}",
            self.package,
            self.installed_version,
            self.required_by,
            self.required_by_version,
            self.constraint
        )?;
        for attribution in &self.also_required_by {
            write!(f, "\n\t{}", attribution)?;
        }
        Ok(())
    }
}

/// Overall verdict of an audit run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    /// No non-excluded conflicts
    Passed,
    /// At least one non-excluded conflict
    Failed,
}

impl AuditStatus {
    /// Returns true for `Failed`
    pub fn is_failure(&self) -> bool {
        matches!(self, AuditStatus::Failed)
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditStatus::Passed => write!(f, "passed"),
            AuditStatus::Failed => write!(f, "failed"),
        }
    }
}
