//! Common types for the version layer

use serde::Deserialize;

/// One page entry of a registration index: the versions it covers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionRange {
    pub lower: String,
    pub upper: String,
}

impl VersionRange {
    pub fn new(lower: &str, upper: &str) -> Self {
        Self {
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }
}
