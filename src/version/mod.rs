//! Version ordering for installed-package versions
//!
//! This module provides:
//! - PEP 440 parsing and ordering (`1.0 == 1.0.0`, `1.0rc1 < 1.0 < 1.0.post1`)
//! - A legacy fallback so any string has a stable position
//! - `compare`, which evaluates one constraint operator

mod legacy;
mod pep440;

pub use legacy::LegacyVersion;
pub use pep440::{Pep440Version, PreRelease};

use crate::domain::Operator;
use std::cmp::Ordering;

/// A version string parsed for ordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Version {
    /// Not PEP 440; sorts before every PEP 440 version
    Legacy(LegacyVersion),
    /// Standard PEP 440 version
    Pep440(Pep440Version),
}

impl Version {
    /// Parse any string. Never fails: non-PEP 440 text becomes `Legacy`.
    pub fn parse(text: &str) -> Self {
        match Pep440Version::parse(text) {
            Some(version) => Version::Pep440(version),
            None => Version::Legacy(LegacyVersion::parse(text)),
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Version::Pep440(a), Version::Pep440(b)) => a.cmp(b),
            (Version::Legacy(a), Version::Legacy(b)) => a.cmp(b),
            (Version::Legacy(_), Version::Pep440(_)) => Ordering::Less,
            (Version::Pep440(_), Version::Legacy(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two version strings
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    Version::parse(a).cmp(&Version::parse(b))
}

/// Evaluate `installed <operator> target`. An invalid operator is never satisfied.
pub fn compare(installed: &str, target: &str, operator: &Operator) -> bool {
    let ordering = compare_versions(installed, target);
    match operator {
        Operator::Equal => ordering == Ordering::Equal,
        Operator::NotEqual => ordering != Ordering::Equal,
        Operator::LessOrEqual => ordering != Ordering::Greater,
        Operator::GreaterOrEqual => ordering != Ordering::Less,
        Operator::Less => ordering == Ordering::Less,
        Operator::Greater => ordering == Ordering::Greater,
        Operator::Invalid(_) => false,
    }
}
