//! JSON output formatter for machine processing

use crate::audit::AuditResult;
use crate::domain::{Attribution, AuditStatus, ConflictReport};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    status: AuditStatus,
    packages_checked: usize,
    conflicts: Vec<JsonConflict>,
    /// Conflicts declared by excluded packages (only in verbose mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    suppressed: Option<Vec<JsonConflict>>,
}

/// JSON representation of a conflict
#[derive(Serialize)]
struct JsonConflict {
    package: String,
    installed_version: String,
    required_by: String,
    required_by_version: String,
    constraint: String,
    also_required_by: Vec<JsonAttribution>,
}

/// JSON representation of an attribution; `constraint` is null for "any"
#[derive(Serialize)]
struct JsonAttribution {
    package: String,
    version: String,
    constraint: Option<String>,
}

impl From<&Attribution> for JsonAttribution {
    fn from(attribution: &Attribution) -> Self {
        Self {
            package: attribution.package.clone(),
            version: attribution.version.clone(),
            constraint: attribution.constraint.as_ref().map(ToString::to_string),
        }
    }
}

impl From<&ConflictReport> for JsonConflict {
    fn from(report: &ConflictReport) -> Self {
        Self {
            package: report.package.clone(),
            installed_version: report.installed_version.clone(),
            required_by: report.required_by.clone(),
            required_by_version: report.required_by_version.clone(),
            constraint: report.constraint.to_string(),
            also_required_by: report.also_required_by.iter().map(Into::into).collect(),
        }
    }
}

impl JsonFormatter {
    fn to_json(&self, result: &AuditResult) -> JsonOutput {
        let suppressed = (self.verbosity == Verbosity::Verbose)
            .then(|| result.suppressed.iter().map(Into::into).collect());

        JsonOutput {
            status: result.status(),
            packages_checked: result.packages_checked,
            conflicts: result.conflicts.iter().map(Into::into).collect(),
            suppressed,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &AuditResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = self.to_json(result);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
