//! In-memory registry of installed packages
//!
//! One package per name. Registering a name that is already present replaces
//! the earlier package entirely, so the source processed last wins, the same
//! way a later directory shadows an earlier one on an import path.

use crate::domain::Package;
use std::collections::BTreeMap;
use tracing::debug;

/// Installed packages keyed by name, iterated in name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRegistry {
    packages: BTreeMap<String, Package>,
}

impl PackageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package, returning the package it replaced, if any
    pub fn register(&mut self, package: Package) -> Option<Package> {
        let replaced = self.packages.insert(package.name.clone(), package);
        if let Some(ref old) = replaced {
            debug!("{} {} shadowed by a later source", old.name, old.version);
        }
        replaced
    }

    /// Look up a package by name
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// All packages, ordered by name
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Packages that declare a dependency on `name`, ordered by name
    pub fn dependents_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Package> + 'a {
        self.packages().filter(move |p| p.depends_on(name))
    }

    /// Number of registered packages
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<Package> for PackageRegistry {
    fn from_iter<T: IntoIterator<Item = Package>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<Package> for PackageRegistry {
    fn extend<T: IntoIterator<Item = Package>>(&mut self, iter: T) {
        for package in iter {
            self.register(package);
        }
    }
}
