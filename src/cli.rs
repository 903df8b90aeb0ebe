//! CLI argument parsing module for pkgaudit

use crate::audit::ExclusionSet;
use crate::error::ConfigError;
use crate::interpreter::DEFAULT_PYTHON;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Audit installed Python packages for dependency version conflicts
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pkgaudit",
    version,
    about = "Audit installed Python packages for dependency version conflicts"
)]
pub struct CliArgs {
    /// Directory holding installed packages, e.g. site-packages
    /// (can be specified multiple times; default: the interpreter's sys.path)
    #[arg(short = 'p', long = "package-path", action = ArgAction::Append)]
    pub package_paths: Vec<PathBuf>,

    /// Comma-separated packages whose own requirements are not enforced
    #[arg(
        short = 'e',
        long = "exclude-requires-from",
        value_delimiter = ',',
        action = ArgAction::Append
    )]
    pub exclude_requires_from: Vec<String>,

    /// Python interpreter used to find the default search path
    #[arg(long, env = "PKGAUDIT_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (debug logging, suppressed conflicts)
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - summary line only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Build the exclusion set, rejecting empty names
    pub fn exclusions(&self) -> Result<ExclusionSet, ConfigError> {
        if self.exclude_requires_from.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::EmptyExclusion {
                value: self.exclude_requires_from.join(","),
            });
        }
        Ok(self
            .exclude_requires_from
            .iter()
            .map(|n| n.trim())
            .collect())
    }

    /// Check for mutually exclusive options
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        Ok(())
    }

    /// Returns true if the search path must come from the interpreter
    pub fn uses_interpreter_path(&self) -> bool {
        self.package_paths.is_empty()
    }
}
