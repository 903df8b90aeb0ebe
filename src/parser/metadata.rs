//! Package extraction from distribution metadata records
//!
//! Recognized header lines (case-sensitive, at line start):
//! - `Name: <name>`
//! - `Version: <version>`
//! - `Requires-Dist: <requirement>`

use super::parse_requirement;
use crate::domain::{Dependency, Package};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Name: (\S*)").unwrap());
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Version: (\S*)").unwrap());
static REQUIRES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Requires-Dist:\s*(\S.*)$").unwrap());

/// A recognized metadata line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField<'a> {
    /// `Name:` with a non-empty value
    Name(&'a str),
    /// `Version:` with a non-empty value
    Version(&'a str),
    /// `Requires-Dist:` with its raw requirement text
    RequiresDist(&'a str),
}

impl<'a> MetadataField<'a> {
    /// Classify a line. Returns None for unrecognized lines and for
    /// `Name:`/`Version:` lines with an empty value.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(name) = capture(&NAME_RE, line) {
            return (!name.is_empty()).then_some(MetadataField::Name(name));
        }
        if let Some(version) = capture(&VERSION_RE, line) {
            return (!version.is_empty()).then_some(MetadataField::Version(version));
        }
        capture(&REQUIRES_RE, line).map(MetadataField::RequiresDist)
    }
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Name and version as they are discovered; fixed once both are known
#[derive(Debug, Default)]
struct Identity {
    name: Option<String>,
    version: Option<String>,
}

impl Identity {
    fn observe(&mut self, field: MetadataField<'_>) {
        match field {
            MetadataField::Name(name) => self.name = Some(name.to_string()),
            MetadataField::Version(version) => self.version = Some(version.to_string()),
            MetadataField::RequiresDist(_) => {}
        }
    }

    fn complete(&self) -> Option<Package> {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => Some(Package::new(name, version)),
            _ => None,
        }
    }
}

/// Build a package from a single-file record (`METADATA`).
///
/// The package takes the name and version known at the first point where both
/// have been seen; later `Name:`/`Version:` lines are ignored. Requirements
/// seen before that point are held back and added once the package exists, in
/// record order. Returns None if the record never names both.
pub fn extract_single_record<I, S>(lines: I) -> Option<Package>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut identity = Identity::default();
    let mut package: Option<Package> = None;
    let mut pending: Vec<Dependency> = Vec::new();

    for line in lines {
        let Some(field) = MetadataField::parse(line.as_ref()) else {
            continue;
        };

        match field {
            MetadataField::RequiresDist(raw) => match parse_requirement(raw) {
                Some(dep) => match package.as_mut() {
                    Some(pkg) => pkg.add_dependency(dep),
                    None => pending.push(dep),
                },
                None => debug!("ignoring requirement without a name: {:?}", raw),
            },
            other if package.is_none() => {
                identity.observe(other);
                package = identity.complete().map(|pkg| replay(pkg, &mut pending));
            }
            _ => {}
        }
    }

    package
}

/// Add requirements held back until the package identity was known
fn replay(mut package: Package, pending: &mut Vec<Dependency>) -> Package {
    if !pending.is_empty() {
        debug!(
            "{}: replaying {} requirement(s) declared before Name/Version",
            package.name,
            pending.len()
        );
    }
    for dep in pending.drain(..) {
        package.add_dependency(dep);
    }
    package
}

/// Build a package from a split record (`PKG-INFO` header plus `requires.txt`).
///
/// The header is read until both name and version are known. Only
/// `Requires-Dist:` lines of the requirements record are used. Returns None
/// when the header lacks a name or version, or when the requirements record
/// is missing.
pub fn extract_split_record<H, HS, R, RS>(header: H, requirements: Option<R>) -> Option<Package>
where
    H: IntoIterator<Item = HS>,
    HS: AsRef<str>,
    R: IntoIterator<Item = RS>,
    RS: AsRef<str>,
{
    let mut identity = Identity::default();
    let mut package = None;

    for line in header {
        if let Some(field) = MetadataField::parse(line.as_ref()) {
            identity.observe(field);
        }
        package = identity.complete();
        if package.is_some() {
            break;
        }
    }

    let mut package = package?;
    let Some(requirements) = requirements else {
        debug!("{}: requirements record missing, discarding", package.name);
        return None;
    };

    for line in requirements {
        if let Some(MetadataField::RequiresDist(raw)) = MetadataField::parse(line.as_ref()) {
            if let Some(dep) = parse_requirement(raw) {
                package.add_dependency(dep);
            }
        }
    }

    Some(package)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_REQUIREMENTS: Option<Vec<&str>> = None;

    #[test]
    fn test_field_parse() {
        assert_eq!(
            MetadataField::parse("Name: requests"),
            Some(MetadataField::Name("requests"))
        );
        assert_eq!(
            MetadataField::parse("Version: 2.31.0\n"),
            Some(MetadataField::Version("2.31.0"))
        );
        assert_eq!(
            MetadataField::parse("Requires-Dist: idna (<4,>=2.5)\r\n"),
            Some(MetadataField::RequiresDist("idna (<4,>=2.5)"))
        );
    }

    #[test]
    fn test_field_parse_exact_prefix() {
        assert_eq!(MetadataField::parse("name: requests"), None);
        assert_eq!(MetadataField::parse(" Name: requests"), None);
        assert_eq!(MetadataField::parse("Name:requests"), None);
        assert_eq!(MetadataField::parse("Metadata-Version: 2.1"), None);
        assert_eq!(MetadataField::parse("Name: "), None);
        assert_eq!(MetadataField::parse("Requires-Dist:   "), None);
    }

    #[test]
    fn test_field_parse_takes_first_word() {
        assert_eq!(
            MetadataField::parse("Version: 1.0 extra"),
            Some(MetadataField::Version("1.0"))
        );
    }

    #[test]
    fn test_single_record() {
        let record = [
            "Metadata-Version: 2.1",
            "Name: requests",
            "Version: 2.31.0",
            "Summary: Python HTTP for Humans.",
            "Requires-Dist: charset-normalizer (<4,>=2)",
            "Requires-Dist: idna (<4,>=2.5)",
            "Requires-Dist: PySocks (!=1.5.7,>=1.5.6) ; extra == 'socks'",
        ];
        let pkg = extract_single_record(record).unwrap();
        assert_eq!(pkg.name, "requests");
        assert_eq!(pkg.version, "2.31.0");
        assert_eq!(pkg.dependency_count(), 3);
        assert_eq!(
            pkg.dependency("PySocks")
                .unwrap()
                .constraint
                .as_ref()
                .unwrap()
                .to_string(),
            "!=1.5.7,>=1.5.6"
        );
    }

    #[test]
    fn test_single_record_missing_version() {
        assert!(extract_single_record(["Name: requests"]).is_none());
        assert!(extract_single_record(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_single_record_requirements_before_version_are_kept() {
        let record = [
            "Name: early",
            "Requires-Dist: six (>=1.0)",
            "Version: 0.1",
            "Requires-Dist: attrs",
        ];
        let pkg = extract_single_record(record).unwrap();
        assert_eq!(pkg.dependency_count(), 2);
        assert!(pkg.dependency("six").unwrap().is_constrained());
    }

    #[test]
    fn test_single_record_later_declaration_wins() {
        let record = [
            "Requires-Dist: six (>=1.0)",
            "Name: pkg",
            "Version: 1.0",
            "Requires-Dist: six",
        ];
        let pkg = extract_single_record(record).unwrap();
        assert!(!pkg.dependency("six").unwrap().is_constrained());
    }

    #[test]
    fn test_single_record_constrained_later_declaration_wins() {
        let record = [
            "Requires-Dist: six (>=1.0)",
            "Name: pkg",
            "Version: 1.0",
            "Requires-Dist: six (<0.5)",
        ];
        let pkg = extract_single_record(record).unwrap();
        assert_eq!(
            pkg.dependency("six")
                .unwrap()
                .constraint
                .as_ref()
                .map(ToString::to_string),
            Some("<0.5".to_string())
        );
    }

    #[test]
    fn test_single_record_identity_is_fixed() {
        let record = ["Name: first", "Version: 1.0", "Name: second", "Version: 2.0"];
        let pkg = extract_single_record(record).unwrap();
        assert_eq!(pkg.name, "first");
        assert_eq!(pkg.version, "1.0");
    }

    #[test]
    fn test_split_record() {
        let header = ["Metadata-Version: 1.1", "Name: legacy", "Version: 0.9"];
        let requirements = ["Requires-Dist: six (>=1.10)", "setuptools", "[extra]"];
        let pkg = extract_split_record(header, Some(requirements)).unwrap();
        assert_eq!(pkg.name, "legacy");
        assert_eq!(pkg.version, "0.9");
        assert_eq!(pkg.dependency_count(), 1);
        assert!(pkg.depends_on("six"));
    }

    #[test]
    fn test_split_record_stops_at_identity() {
        let header = ["Name: legacy", "Version: 0.9", "Name: other"];
        let pkg = extract_split_record(header, Some(Vec::<String>::new())).unwrap();
        assert_eq!(pkg.name, "legacy");
    }

    #[test]
    fn test_split_record_missing_requirements_discards() {
        let header = ["Name: legacy", "Version: 0.9"];
        assert!(extract_split_record(header, NO_REQUIREMENTS).is_none());
    }

    #[test]
    fn test_split_record_incomplete_header() {
        let header = ["Name: legacy"];
        assert!(extract_split_record(header, Some(["Requires-Dist: six"])).is_none());
    }
}
