//! Dotted numeric versions and latest version selection
//!
//! Registry versions are ordered by their numeric release part only:
//! the pre-release suffix (from the first `-`) is dropped before comparing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version: {0}")]
pub struct InvalidVersion(pub String);

/// Version made of one or more non-negative numeric components (`1`, `1.2`, `6.0.0.1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericVersion {
    components: Vec<u64>,
}

impl NumericVersion {
    /// Parses the release part of `version`, ignoring any pre-release suffix.
    ///
    /// Examples:
    /// - "1.2.3" -> [1, 2, 3]
    /// - "1.2.0-beta.1" -> [1, 2, 0]
    /// - "6.0.0.1" -> [6, 0, 0, 1]
    pub fn parse_release(version: &str) -> Result<Self, InvalidVersion> {
        let release = version.split('-').next().unwrap_or_default();
        release.parse()
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl FromStr for NumericVersion {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| InvalidVersion(s.to_string()))?;
        Ok(Self { components })
    }
}

impl Ord for NumericVersion {
    /// Component-wise, so a shorter version sorts before a longer one with
    /// the same prefix (`1.0` < `1.0.0`).
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl PartialOrd for NumericVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NumericVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Select the latest of `versions`, returning the original string.
///
/// Sorts descending by the numeric release part with a stable sort and takes
/// the first entry. Versions that differ only in their pre-release suffix
/// keep their input order; the suffix never breaks the tie.
///
/// Any unparsable version fails the whole selection. An empty input yields
/// `Ok(None)`.
pub fn select_latest<S: AsRef<str>>(versions: &[S]) -> Result<Option<String>, InvalidVersion> {
    let mut parsed = versions
        .iter()
        .map(|v| NumericVersion::parse_release(v.as_ref()).map(|n| (v.as_ref(), n)))
        .collect::<Result<Vec<_>, _>>()?;

    parsed.sort_by(|(_, a), (_, b)| b.cmp(a));

    Ok(parsed.first().map(|(original, _)| original.to_string()))
}
