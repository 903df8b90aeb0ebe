//! Python interpreter integration for the default search path
//!
//! This module provides:
//! - Querying an interpreter for its `sys.path`
//! - Parsing the reported entries into directories

use crate::error::DiscoveryError;
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::debug;

/// Default interpreter program
pub const DEFAULT_PYTHON: &str = "python3";

const SYS_PATH_SCRIPT: &str = "import sys; print('\\n'.join(sys.path))";

/// Trait for obtaining the interpreter's package search path
pub trait InterpreterRunner {
    /// Return the directories the interpreter imports packages from
    fn search_path(&self) -> Result<Vec<PathBuf>, DiscoveryError>;
}

/// Interpreter runner that executes a real Python program
#[derive(Debug, Clone)]
pub struct SystemInterpreter {
    program: String,
}

impl SystemInterpreter {
    /// Create a runner for the given program name or path
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run the interpreter and capture output
    fn run_command(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(&self.program).args(args).output()
    }
}

impl Default for SystemInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl InterpreterRunner for SystemInterpreter {
    fn search_path(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        debug!("querying sys.path from {}", self.program);
        let output = self
            .run_command(&["-c", SYS_PATH_SCRIPT])
            .map_err(|e| DiscoveryError::interpreter_launch(&self.program, e))?;

        if !output.status.success() {
            return Err(DiscoveryError::interpreter_failed(
                &self.program,
                String::from_utf8_lossy(&output.stderr).trim(),
            ));
        }

        Ok(parse_search_path(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parse one entry per line. An empty entry stands for the current directory.
pub fn parse_search_path(output: &str) -> Vec<PathBuf> {
    output
        .lines()
        .map(|line| {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                PathBuf::from(".")
            } else {
                PathBuf::from(line)
            }
        })
        .collect()
}
