//! Conflict detection over the installed package set
//!
//! This module provides:
//! - The exclusion set for requiring packages
//! - `detect`, which checks every declared constraint against the installed
//!   version of its target and attributes each failure to all requirers

mod exclusion;

pub use exclusion::ExclusionSet;

use crate::domain::{Attribution, AuditStatus, ConflictReport, Package};
use crate::registry::PackageRegistry;
use tracing::{debug, info};

/// Outcome of one audit run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditResult {
    /// Failed constraints declared by non-excluded packages
    pub conflicts: Vec<ConflictReport>,
    /// Failed constraints declared by excluded packages
    pub suppressed: Vec<ConflictReport>,
    /// Number of installed packages examined
    pub packages_checked: usize,
}

impl AuditResult {
    /// Failed if any non-excluded conflict was found
    pub fn status(&self) -> AuditStatus {
        if self.conflicts.is_empty() {
            AuditStatus::Passed
        } else {
            AuditStatus::Failed
        }
    }

    /// Number of counted conflicts
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    /// Returns true if no counted conflict was found
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Check every (installed, requiring) pair in the registry.
///
/// A pair is checked when the requiring package declares a constrained
/// dependency on the installed package. Packages are visited in name order,
/// so the reports come out in (installed, requiring) name order.
pub fn detect(registry: &PackageRegistry, exclusions: &ExclusionSet) -> AuditResult {
    let mut result = AuditResult {
        packages_checked: registry.len(),
        ..AuditResult::default()
    };

    for installed in registry.packages() {
        for requirer in registry.dependents_of(&installed.name) {
            let Some(constraint) = requirer
                .dependency(&installed.name)
                .and_then(|dep| dep.constraint.as_ref())
            else {
                continue;
            };

            if constraint.is_satisfied_by(&installed.version) {
                continue;
            }

            let report = ConflictReport {
                package: installed.name.clone(),
                installed_version: installed.version.clone(),
                required_by: requirer.name.clone(),
                required_by_version: requirer.version.clone(),
                constraint: constraint.clone(),
                also_required_by: attributions(registry, installed, requirer),
            };

            if exclusions.excludes(&requirer.name) {
                debug!(
                    "suppressed: {} {} fails {} from excluded {}",
                    installed.name, installed.version, constraint, requirer.name
                );
                result.suppressed.push(report);
            } else {
                result.conflicts.push(report);
            }
        }
    }

    info!(
        "checked {} packages: {} conflict(s), {} suppressed",
        result.packages_checked,
        result.conflicts.len(),
        result.suppressed.len()
    );
    result
}

/// Every other package requiring `installed`, with its constraint (None = any).
/// Excluded packages are listed too.
fn attributions(
    registry: &PackageRegistry,
    installed: &Package,
    requirer: &Package,
) -> Vec<Attribution> {
    registry
        .dependents_of(&installed.name)
        .filter(|other| other.name != requirer.name)
        .filter_map(|other| {
            other.dependency(&installed.name).map(|dep| {
                Attribution::new(&other.name, &other.version, dep.constraint.clone())
            })
        })
        .collect()
}
