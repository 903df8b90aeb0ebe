//! pkgaudit - Installed Python package conflict auditor library
//!
//! This library finds the packages installed on a Python search path and
//! reports every installed version that fails a constraint declared by
//! another installed package:
//! - `*.dist-info` (METADATA)
//! - `*.egg-info` (PKG-INFO + requires.txt)

pub mod audit;
pub mod cli;
pub mod discovery;
pub mod domain;
pub mod error;
pub mod interpreter;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod registry;
pub mod version;
