//! Installed package with its declared dependencies

use super::Dependency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One installed package as described by its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Distribution name
    pub name: String,
    /// Installed version string
    pub version: String,
    /// Declared dependencies keyed by dependency name
    dependencies: BTreeMap<String, Dependency>,
}

impl Package {
    /// Creates a package without dependencies
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: BTreeMap::new(),
        }
    }

    /// Adds a dependency (builder pattern)
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.add_dependency(dependency);
        self
    }

    /// Adds a dependency. A later declaration of the same name replaces the earlier one.
    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.insert(dependency.name.clone(), dependency);
    }

    /// Looks up the dependency declared on `name`
    pub fn dependency(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.get(name)
    }

    /// Returns true if this package declares a dependency on `name`
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// All declared dependencies, ordered by name
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.values()
    }

    /// Number of declared dependencies
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
