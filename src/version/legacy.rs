//! Fallback ordering for versions that are not PEP 440
//!
//! The version is lowercased and broken into numeric runs, letter runs,
//! `.` and `-`. Numbers are zero-padded to eight digits and words are
//! prefixed with `*`, so the pieces compare as plain strings. Every such
//! version sorts before every PEP 440 version.

use regex::Regex;
use std::sync::LazyLock;

static COMPONENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+|[a-z]+|\.|-").unwrap());

const FINAL: &str = "*final";
const FINAL_DASH: &str = "*final-";
const ZERO: &str = "00000000";

/// Comparison key for a non-PEP 440 version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyVersion {
    parts: Vec<String>,
}

impl LegacyVersion {
    /// Build the comparison key. Never fails.
    pub fn parse(text: &str) -> Self {
        let mut parts: Vec<String> = Vec::new();
        for part in components(&text.to_lowercase()) {
            if part.starts_with('*') {
                if part.as_str() < FINAL {
                    while parts.last().is_some_and(|p| p == FINAL_DASH) {
                        parts.pop();
                    }
                }
                while parts.last().is_some_and(|p| p == ZERO) {
                    parts.pop();
                }
            }
            parts.push(part);
        }
        Self { parts }
    }
}

/// Split into normalized pieces, keeping the text between matches as well
fn components(text: &str) -> Vec<String> {
    let mut raw = Vec::new();
    let mut last = 0;
    for m in COMPONENT_RE.find_iter(text) {
        raw.push(&text[last..m.start()]);
        raw.push(m.as_str());
        last = m.end();
    }
    raw.push(&text[last..]);

    let mut pieces: Vec<String> = raw
        .into_iter()
        .map(|piece| match piece {
            "pre" | "preview" | "rc" => "c",
            "-" => "final-",
            "dev" => "@",
            other => other,
        })
        .filter(|piece| !piece.is_empty() && *piece != ".")
        .map(|piece| {
            if piece.starts_with(|c: char| c.is_ascii_digit()) {
                format!("{:0>8}", piece)
            } else {
                format!("*{}", piece)
            }
        })
        .collect();
    pieces.push(FINAL.to_string());
    pieces
}
