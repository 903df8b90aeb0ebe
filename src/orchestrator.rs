//! Audit orchestrator for coordinating the whole run
//!
//! This module provides:
//! - Workflow coordination: discover -> extract -> register -> detect
//! - Search path resolution from CLI arguments or the interpreter
//! - Last-write-wins registration in discovery order

use crate::audit::{detect, AuditResult, ExclusionSet};
use crate::cli::CliArgs;
use crate::discovery::{discover_sources, FsRecordReader, MetadataSource, RecordReader};
use crate::error::AppError;
use crate::interpreter::InterpreterRunner;
use crate::progress::ScanProgress;
use crate::registry::PackageRegistry;
use std::path::PathBuf;
use tracing::{debug, info};

/// Settings for one audit run
#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    /// Directories searched for metadata sources, in priority order (last wins)
    pub search_path: Vec<PathBuf>,
    /// Requiring packages whose failed constraints are not counted
    pub exclusions: ExclusionSet,
    /// Whether to draw a progress bar while reading metadata
    pub show_progress: bool,
}

impl AuditConfig {
    /// Create a configuration for the given search path
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            ..Self::default()
        }
    }

    /// Set the exclusion set
    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Build the configuration from CLI arguments. The interpreter is only
    /// consulted when no package path was given.
    pub fn from_cli(args: &CliArgs, interpreter: &dyn InterpreterRunner) -> Result<Self, AppError> {
        args.validate()?;
        let exclusions = args.exclusions()?;

        let search_path = if args.uses_interpreter_path() {
            interpreter.search_path()?
        } else {
            args.package_paths.clone()
        };
        debug!("search path: {:?}", search_path);

        Ok(Self::new(search_path)
            .with_exclusions(exclusions)
            .with_progress(!args.quiet && !args.json))
    }
}

/// Orchestrator for coordinating the audit workflow
pub struct Orchestrator {
    config: AuditConfig,
    reader: Box<dyn RecordReader>,
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorResult {
    /// Every installed package that was found
    pub registry: PackageRegistry,
    /// Conflicts found among them
    pub audit: AuditResult,
    /// Metadata sources discovered on the search path
    pub sources_found: usize,
    /// Sources that did not yield a package
    pub sources_skipped: usize,
}

impl Orchestrator {
    /// Create an orchestrator that reads metadata from the file system
    pub fn new(config: AuditConfig) -> Self {
        Self::with_reader(config, Box::new(FsRecordReader::new()))
    }

    /// Create an orchestrator with a custom record reader (for testing)
    pub fn with_reader(config: AuditConfig, reader: Box<dyn RecordReader>) -> Self {
        Self { config, reader }
    }

    /// The configuration of this run
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Run the audit workflow
    pub fn run(&self) -> OrchestratorResult {
        let sources = discover_sources(&self.config.search_path);
        let (registry, skipped) = self.build_registry(&sources);
        let audit = detect(&registry, &self.config.exclusions);

        OrchestratorResult {
            registry,
            audit,
            sources_found: sources.len(),
            sources_skipped: skipped,
        }
    }

    /// Load every source in order into a fresh registry. Returns the registry
    /// and the number of sources that produced no package.
    pub fn build_registry(&self, sources: &[MetadataSource]) -> (PackageRegistry, usize) {
        let progress = ScanProgress::start(self.config.show_progress, sources.len());
        let mut registry = PackageRegistry::new();
        let mut skipped = 0;

        for source in sources {
            match source.load(self.reader.as_ref()) {
                Some(package) => {
                    registry.register(package);
                }
                None => skipped += 1,
            }
            progress.inc();
        }
        progress.finish();

        info!(
            "registered {} package(s) from {} source(s), {} skipped",
            registry.len(),
            sources.len(),
            skipped
        );
        (registry, skipped)
    }
}
