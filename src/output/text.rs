//! Text output formatter for human-readable display
//!
//! One `FAILED:` line per conflict, an indented `also from:` line per other
//! requiring package, and a closing summary line.

use crate::audit::AuditResult;
use crate::domain::{Attribution, ConflictReport};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Write the primary line of a report
    fn format_report_line(
        &self,
        label: &str,
        report: &ConflictReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "{} {} ver {} installed, {} ver {} requires {}",
                label.red().bold(),
                report.package.bold(),
                report.installed_version.yellow(),
                report.required_by.bold(),
                report.required_by_version,
                report.constraint.to_string().cyan()
            )
        } else {
            writeln!(
                writer,
                "{} {} ver {} installed, {} ver {} requires {}",
                label,
                report.package,
                report.installed_version,
                report.required_by,
                report.required_by_version,
                report.constraint
            )
        }
    }

    fn format_attribution_line(
        &self,
        attribution: &Attribution,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "\t{}", attribution.to_string().dimmed())
        } else {
            writeln!(writer, "\t{}", attribution)
        }
    }

    fn format_report(
        &self,
        label: &str,
        report: &ConflictReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.format_report_line(label, report, writer)?;
        for attribution in &report.also_required_by {
            self.format_attribution_line(attribution, writer)?;
        }
        Ok(())
    }

    /// Write the closing summary line
    fn format_summary(&self, result: &AuditResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let checked = result.packages_checked;
        let conflicts = result.conflict_count();

        if self.color {
            let count = if conflicts == 0 {
                conflicts.to_string().green().bold()
            } else {
                conflicts.to_string().red().bold()
            };
            writeln!(
                writer,
                "{} packages checked, {} conflicts",
                checked.to_string().bold(),
                count
            )
        } else {
            writeln!(writer, "{} packages checked, {} conflicts", checked, conflicts)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &AuditResult, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            for report in &result.conflicts {
                self.format_report("FAILED:", report, writer)?;
            }
        }

        if self.verbosity == Verbosity::Verbose {
            for report in &result.suppressed {
                self.format_report("SUPPRESSED:", report, writer)?;
            }
        }

        self.format_summary(result, writer)
    }
}
