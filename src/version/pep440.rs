//! PEP 440 version parsing and ordering
//!
//! Release segments compare numerically with trailing zeros ignored, so
//! `1.0 == 1.0.0`. Around a release, the order is:
//! `1.0.dev1 < 1.0a1 < 1.0b1 < 1.0rc1 < 1.0 < 1.0+local < 1.0.post1`.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        ^\s*v?
        (?:(?P<epoch>[0-9]+)!)?
        (?P<release>[0-9]+(?:\.[0-9]+)*)
        (?P<pre>
            [-_.]?
            (?P<pre_l>a|b|c|rc|alpha|beta|pre|preview)
            [-_.]?
            (?P<pre_n>[0-9]+)?
        )?
        (?P<post>
            (?:-(?P<post_n1>[0-9]+))
            |
            (?:[-_.]?(?P<post_l>post|rev|r)[-_.]?(?P<post_n2>[0-9]+)?)
        )?
        (?P<dev>
            [-_.]?
            (?P<dev_l>dev)
            [-_.]?
            (?P<dev_n>[0-9]+)?
        )?
        (?:\+(?P<local>[a-z0-9]+(?:[-_.][a-z0-9]+)*))?
        \s*$",
    )
    .unwrap()
});

/// Pre-release phase, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreRelease {
    Alpha,
    Beta,
    ReleaseCandidate,
}

impl PreRelease {
    fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "a" | "alpha" => PreRelease::Alpha,
            "b" | "beta" => PreRelease::Beta,
            _ => PreRelease::ReleaseCandidate,
        }
    }
}

/// One dot/dash separated piece of a local version label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LocalSegment {
    Text(String),
    Number(u64),
}

impl Ord for LocalSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        // numeric segments sort after alphanumeric ones
        match (self, other) {
            (LocalSegment::Number(a), LocalSegment::Number(b)) => a.cmp(b),
            (LocalSegment::Text(a), LocalSegment::Text(b)) => a.cmp(b),
            (LocalSegment::Number(_), LocalSegment::Text(_)) => Ordering::Greater,
            (LocalSegment::Text(_), LocalSegment::Number(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for LocalSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key for the pre-release slot. `Dev` covers a bare `X.Y.devN`,
/// which sorts below every pre-release of the same release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum PreKey {
    Dev,
    Pre(PreRelease, u64),
    Final,
}

/// A parsed PEP 440 version
#[derive(Debug, Clone)]
pub struct Pep440Version {
    epoch: u64,
    release: Vec<u64>,
    pre: Option<(PreRelease, u64)>,
    post: Option<u64>,
    dev: Option<u64>,
    local: Option<Vec<LocalSegment>>,
}

impl Pep440Version {
    /// Parse a version string. Returns None when the text is not PEP 440
    /// or a number does not fit in 64 bits.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(text)?;
        let number = |name: &str| -> Option<Option<u64>> {
            match caps.name(name) {
                Some(m) => m.as_str().parse().ok().map(Some),
                None => Some(None),
            }
        };

        let epoch = number("epoch")?.unwrap_or(0);
        let release = caps
            .name("release")?
            .as_str()
            .split('.')
            .map(|part| part.parse().ok())
            .collect::<Option<Vec<u64>>>()?;

        let pre = match caps.name("pre_l") {
            Some(label) => Some((
                PreRelease::from_label(label.as_str()),
                number("pre_n")?.unwrap_or(0),
            )),
            None => None,
        };

        let post = if caps.name("post").is_some() {
            Some(number("post_n1")?.or(number("post_n2")?).unwrap_or(0))
        } else {
            None
        };

        let dev = if caps.name("dev").is_some() {
            Some(number("dev_n")?.unwrap_or(0))
        } else {
            None
        };

        let local = match caps.name("local") {
            Some(m) => Some(
                m.as_str()
                    .split(['-', '_', '.'])
                    .map(|seg| match seg.parse() {
                        Ok(n) => LocalSegment::Number(n),
                        Err(_) => LocalSegment::Text(seg.to_ascii_lowercase()),
                    })
                    .collect(),
            ),
            None => None,
        };

        Some(Self {
            epoch,
            release,
            pre,
            post,
            dev,
            local,
        })
    }

    fn trimmed_release(&self) -> &[u64] {
        let end = self
            .release
            .iter()
            .rposition(|&n| n != 0)
            .map_or(0, |i| i + 1);
        &self.release[..end]
    }

    fn pre_key(&self) -> PreKey {
        match (self.pre, self.post, self.dev) {
            (None, None, Some(_)) => PreKey::Dev,
            (Some((phase, n)), _, _) => PreKey::Pre(phase, n),
            (None, _, _) => PreKey::Final,
        }
    }
}

impl Ord for Pep440Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.trimmed_release().cmp(other.trimmed_release()))
            .then_with(|| self.pre_key().cmp(&other.pre_key()))
            // absent post sorts first, absent dev sorts last
            .then_with(|| self.post.cmp(&other.post))
            .then_with(|| match (self.dev, other.dev) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            })
            .then_with(|| self.local.cmp(&other.local))
    }
}

impl PartialEq for Pep440Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pep440Version {}

impl PartialOrd for Pep440Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Pep440Version {
        Pep440Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_simple() {
        let version = v("1.2.3");
        assert_eq!(version.release, vec![1, 2, 3]);
        assert_eq!(version.epoch, 0);
        assert_eq!(version.pre, None);
        assert_eq!(version.dev, None);
    }

    #[test]
    fn test_parse_full() {
        let version = v("2!1.0rc2.post3.dev4+ubuntu.1");
        assert_eq!(version.epoch, 2);
        assert_eq!(version.pre, Some((PreRelease::ReleaseCandidate, 2)));
        assert_eq!(version.post, Some(3));
        assert_eq!(version.dev, Some(4));
        assert_eq!(
            version.local,
            Some(vec![
                LocalSegment::Text("ubuntu".to_string()),
                LocalSegment::Number(1)
            ])
        );
    }

    #[test]
    fn test_parse_spelled_out_labels() {
        assert_eq!(v("1.0alpha1").pre, Some((PreRelease::Alpha, 1)));
        assert_eq!(v("1.0-beta.2").pre, Some((PreRelease::Beta, 2)));
        assert_eq!(v("1.0c1").pre, Some((PreRelease::ReleaseCandidate, 1)));
        assert_eq!(v("1.0-1").post, Some(1));
        assert_eq!(v("1.0.rev2").post, Some(2));
        assert_eq!(v("V1.0").release, vec![1, 0]);
    }

    #[test]
    fn test_parse_rejects_non_pep440() {
        assert!(Pep440Version::parse("").is_none());
        assert!(Pep440Version::parse("abc").is_none());
        assert!(Pep440Version::parse("1.0-foo").is_none());
        assert!(Pep440Version::parse("99999999999999999999999").is_none());
    }

    #[test]
    fn test_trailing_zeros_equal() {
        assert_eq!(v("1.0").cmp(&v("1.0.0")), Ordering::Equal);
        assert_eq!(v("1").cmp(&v("1.0.0.0")), Ordering::Equal);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        assert!(v("1.9") < v("1.10"));
        assert!(v("10.0") > v("9.99"));
    }

    #[test]
    fn test_release_phase_order() {
        let ordered = [
            "1.0.dev1", "1.0a1", "1.0a2.dev1", "1.0a2", "1.0b1", "1.0rc1", "1.0", "1.0+abc",
            "1.0+5", "1.0.post1.dev1", "1.0.post1", "1.1.dev1",
        ];
        for pair in ordered.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_epoch_dominates() {
        assert!(v("1!0.1") > v("2024.1"));
    }
}
