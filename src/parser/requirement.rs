//! Requirement string parser
//!
//! Handles `Requires-Dist` values like:
//! - Bare name: `six`
//! - Parenthesized constraint: `requests (>=2.0,<3.0)`
//! - Spaced constraint: `urllib3 >= 1.21.1, < 1.27`
//! - Environment markers: `pywin32 (>=1.0); sys_platform == "win32"`

use crate::domain::{ConstraintGroup, Dependency};

/// Parse a requirement string into a dependency.
///
/// Anything after `;` is an environment marker and is ignored. The first
/// whitespace-separated word is the name; the remaining words are joined
/// without spaces and parsed as a constraint group. Returns None when no
/// name is present.
pub fn parse_requirement(raw: &str) -> Option<Dependency> {
    let spec = raw.split(';').next().unwrap_or_default();
    let mut words = spec.split_whitespace();
    let name = words.next()?;

    let rest: String = words.collect();
    let constraint = if rest.is_empty() {
        None
    } else {
        ConstraintGroup::parse(&rest)
    };

    Dependency::named(name, constraint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConstraintToken, Operator};

    #[test]
    fn test_parse_bare_name() {
        let dep = parse_requirement("six").unwrap();
        assert_eq!(dep.name, "six");
        assert!(dep.constraint.is_none());
    }

    #[test]
    fn test_parse_parenthesized() {
        let dep = parse_requirement("requests (>=2.0,<3.0)").unwrap();
        assert_eq!(dep.name, "requests");
        assert_eq!(
            dep.constraint.unwrap().tokens(),
            &[
                ConstraintToken::new(Operator::GreaterOrEqual, "2.0"),
                ConstraintToken::new(Operator::Less, "3.0"),
            ]
        );
    }

    #[test]
    fn test_parse_spaced_constraint_is_rejoined() {
        let dep = parse_requirement("urllib3 >= 1.21.1, < 1.27").unwrap();
        assert_eq!(dep.name, "urllib3");
        assert_eq!(dep.constraint.unwrap().to_string(), ">=1.21.1,<1.27");
    }

    #[test]
    fn test_parse_drops_marker() {
        let dep = parse_requirement("pywin32 (>=1.0); sys_platform == \"win32\"").unwrap();
        assert_eq!(dep.name, "pywin32");
        assert_eq!(dep.constraint.unwrap().to_string(), ">=1.0");

        let dep = parse_requirement("pytest ; extra == 'test'").unwrap();
        assert_eq!(dep.name, "pytest");
        assert!(dep.constraint.is_none());
    }

    #[test]
    fn test_parse_attached_specifier_stays_in_name() {
        let dep = parse_requirement("idna>=2.5").unwrap();
        assert_eq!(dep.name, "idna>=2.5");
        assert!(dep.constraint.is_none());
    }

    #[test]
    fn test_parse_empty_name() {
        assert!(parse_requirement("").is_none());
        assert!(parse_requirement("   ").is_none());
        assert!(parse_requirement("; extra == 'x'").is_none());
    }

    #[test]
    fn test_parse_empty_parens_is_unconstrained() {
        let dep = parse_requirement("foo ()").unwrap();
        assert!(dep.constraint.is_none());
    }
}
