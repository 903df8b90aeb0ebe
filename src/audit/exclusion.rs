//! Exclusion set for requiring packages
//!
//! A name in this set silences failures of constraints *declared by* that
//! package. The package is still checked against every other requirer.

use std::collections::BTreeSet;

/// Names of requiring packages whose failed constraints are not counted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name (builder pattern)
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    /// Add a name
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Check whether constraints declared by `requiring_package` are excluded
    pub fn excludes(&self, requiring_package: &str) -> bool {
        self.names.contains(requiring_package)
    }

    /// Returns true if no names are excluded
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_set_empty() {
        let set = ExclusionSet::new();
        assert!(set.is_empty());
        assert!(!set.excludes("anything"));
    }

    #[test]
    fn test_exclusion_set_from_iter() {
        let set: ExclusionSet = ["b", "c", "b"].into_iter().collect();
        assert!(set.excludes("b"));
        assert!(set.excludes("c"));
        assert!(!set.excludes("a"));
        assert_eq!(set.names.len(), 2);
    }

    #[test]
    fn test_exclusion_set_is_case_sensitive() {
        let set = ExclusionSet::new().with("Django");
        assert!(set.excludes("Django"));
        assert!(!set.excludes("django"));
    }
}
