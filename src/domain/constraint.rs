//! Version constraint types for declared requirements
//!
//! Handles constraint groups like:
//! - Single comparison: `>=1.0`, `==2.3.1`, `!=1.5`
//! - AND-joined list: `>=1.0,<2.0`
//! - Parenthesized form from metadata records: `(>=1.0,<2.0)`

use crate::version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters that may make up a comparison operator
const OPERATOR_CHARS: &[char] = &['!', '=', '<', '>'];

/// Relational operator of a constraint token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// Any other operator text (including none); never satisfied
    Invalid(String),
}

impl Operator {
    /// Map operator text to an operator. Unknown text becomes `Invalid`.
    pub fn parse(op: &str) -> Self {
        match op {
            "==" => Operator::Equal,
            "!=" => Operator::NotEqual,
            "<=" => Operator::LessOrEqual,
            ">=" => Operator::GreaterOrEqual,
            "<" => Operator::Less,
            ">" => Operator::Greater,
            other => Operator::Invalid(other.to_string()),
        }
    }

    /// Returns the operator text as written in a requirement
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::Invalid(raw) => raw,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single operator + version literal pair, e.g. `>=1.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintToken {
    /// Comparison operator
    pub operator: Operator,
    /// Version literal the installed version is compared against
    pub version: String,
}

impl ConstraintToken {
    /// Creates a new constraint token
    pub fn new(operator: Operator, version: impl Into<String>) -> Self {
        Self {
            operator,
            version: version.into(),
        }
    }

    /// Parse a token. The operator is the longest leading run of `!`, `=`, `<`, `>`;
    /// the remainder is the version literal. Parsing itself never fails.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        let split = token
            .find(|c: char| !OPERATOR_CHARS.contains(&c))
            .unwrap_or(token.len());
        let (op, literal) = token.split_at(split);
        Self::new(Operator::parse(op), literal.trim())
    }

    /// Check an installed version against this token
    pub fn is_satisfied_by(&self, installed: &str) -> bool {
        version::compare(installed, &self.version, &self.operator)
    }
}

impl fmt::Display for ConstraintToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

/// Non-empty list of tokens that must all hold (logical AND)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintGroup {
    tokens: Vec<ConstraintToken>,
}

impl ConstraintGroup {
    /// Build a group from tokens. Returns None for an empty list.
    pub fn new(tokens: Vec<ConstraintToken>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    /// Parse the constraint part of a requirement.
    ///
    /// One layer of surrounding parentheses is removed, then the text is split
    /// on `,`. Blank pieces are ignored; if nothing is left the result is None
    /// ("any version").
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text.strip_prefix('(').unwrap_or(text);
        let text = text.strip_suffix(')').unwrap_or(text);

        let tokens = text
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(ConstraintToken::parse)
            .collect();

        Self::new(tokens)
    }

    /// The tokens of this group, in declaration order
    pub fn tokens(&self) -> &[ConstraintToken] {
        &self.tokens
    }

    /// Returns true if every token accepts the installed version
    pub fn is_satisfied_by(&self, installed: &str) -> bool {
        self.tokens.iter().all(|t| t.is_satisfied_by(installed))
    }
}

impl fmt::Display for ConstraintGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parse_all_valid() {
        assert_eq!(Operator::parse("=="), Operator::Equal);
        assert_eq!(Operator::parse("!="), Operator::NotEqual);
        assert_eq!(Operator::parse("<="), Operator::LessOrEqual);
        assert_eq!(Operator::parse(">="), Operator::GreaterOrEqual);
        assert_eq!(Operator::parse("<"), Operator::Less);
        assert_eq!(Operator::parse(">"), Operator::Greater);
    }

    #[test]
    fn test_operator_parse_invalid() {
        assert_eq!(Operator::parse("=>"), Operator::Invalid("=>".to_string()));
        assert_eq!(Operator::parse("==="), Operator::Invalid("===".to_string()));
        assert_eq!(Operator::parse(""), Operator::Invalid(String::new()));
        assert_eq!(Operator::parse("<>"), Operator::Invalid("<>".to_string()));
    }

    #[test]
    fn test_token_parse_operator_prefix() {
        let token = ConstraintToken::parse(">=1.0");
        assert_eq!(token.operator, Operator::GreaterOrEqual);
        assert_eq!(token.version, "1.0");

        let token = ConstraintToken::parse("<2.0");
        assert_eq!(token.operator, Operator::Less);
        assert_eq!(token.version, "2.0");
    }

    #[test]
    fn test_token_parse_no_operator() {
        let token = ConstraintToken::parse("1.0");
        assert_eq!(token.operator, Operator::Invalid(String::new()));
        assert_eq!(token.version, "1.0");
    }

    #[test]
    fn test_token_parse_compatible_release_is_invalid() {
        // `~` is not an operator character, so the whole text is the literal
        let token = ConstraintToken::parse("~=1.4");
        assert_eq!(token.operator, Operator::Invalid(String::new()));
        assert_eq!(token.version, "~=1.4");
        assert!(!token.is_satisfied_by("1.4"));
    }

    #[test]
    fn test_token_parse_only_operator() {
        let token = ConstraintToken::parse(">=");
        assert_eq!(token.operator, Operator::GreaterOrEqual);
        assert_eq!(token.version, "");
    }

    #[test]
    fn test_token_parse_tolerates_whitespace() {
        let token = ConstraintToken::parse("  != 1.5 ");
        assert_eq!(token.operator, Operator::NotEqual);
        assert_eq!(token.version, "1.5");
    }

    #[test]
    fn test_group_parse_two_tokens() {
        let group = ConstraintGroup::parse(">=1.0,<2.0").unwrap();
        assert_eq!(
            group.tokens(),
            &[
                ConstraintToken::new(Operator::GreaterOrEqual, "1.0"),
                ConstraintToken::new(Operator::Less, "2.0"),
            ]
        );
        assert_eq!(group.to_string(), ">=1.0,<2.0");
    }

    #[test]
    fn test_group_parse_strips_one_paren_layer() {
        let group = ConstraintGroup::parse("(>=1.0, <2.0)").unwrap();
        assert_eq!(group.to_string(), ">=1.0,<2.0");

        let nested = ConstraintGroup::parse("((>=1.0))").unwrap();
        assert_eq!(nested.tokens()[0].operator, Operator::Invalid(String::new()));
        assert_eq!(nested.tokens()[0].version, "(>=1.0)");
    }

    #[test]
    fn test_group_parse_empty_is_absent() {
        assert!(ConstraintGroup::parse("").is_none());
        assert!(ConstraintGroup::parse("()").is_none());
        assert!(ConstraintGroup::parse(" , ").is_none());
    }

    #[test]
    fn test_group_parse_drops_blank_pieces() {
        let group = ConstraintGroup::parse(">=1.0,").unwrap();
        assert_eq!(group.tokens().len(), 1);
    }

    #[test]
    fn test_group_new_rejects_empty() {
        assert!(ConstraintGroup::new(Vec::new()).is_none());
    }

    #[test]
    fn test_group_and_semantics() {
        let group = ConstraintGroup::parse(">=1.0,<2.0").unwrap();
        assert!(group.is_satisfied_by("1.5"));
        assert!(group.is_satisfied_by("1.0"));
        assert!(!group.is_satisfied_by("0.9"));
        assert!(!group.is_satisfied_by("2.0"));
    }

    #[test]
    fn test_group_single_failing_token_fails_group() {
        let group = ConstraintGroup::parse(">=1.0,<3.0,!=2.5").unwrap();
        assert!(group.is_satisfied_by("2.4"));
        assert!(!group.is_satisfied_by("2.5"));
    }

    #[test]
    fn test_group_invalid_operator_never_satisfied() {
        let group = ConstraintGroup::parse("=>1.0").unwrap();
        assert!(!group.is_satisfied_by("1.0"));
        assert!(!group.is_satisfied_by("5.0"));
    }

    #[test]
    fn test_serde_constraint_group() {
        let group = ConstraintGroup::parse(">=1.0,<2.0").unwrap();
        let json = serde_json::to_string(&group).unwrap();
        let parsed: ConstraintGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, group);
    }
}
