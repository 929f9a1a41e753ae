//! Registry test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use csproj_outdated::version::error::RegistryError;
use csproj_outdated::version::registry::Registry;
use csproj_outdated::version::types::VersionRange;

/// In-memory registry keyed by lowercased package name
#[derive(Default)]
pub struct FakeRegistry {
    ranges: HashMap<String, Vec<VersionRange>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package whose index items have the given upper bounds
    pub fn with_uppers(mut self, package: &str, uppers: Vec<&str>) -> Self {
        self.ranges.insert(
            package.to_lowercase(),
            uppers
                .into_iter()
                .map(|upper| VersionRange::new("0.0.1", upper))
                .collect(),
        );
        self
    }
}

#[async_trait]
impl Registry for FakeRegistry {
    async fn fetch_version_ranges(
        &self,
        package_name: &str,
    ) -> Result<Vec<VersionRange>, RegistryError> {
        match self.ranges.get(&package_name.to_lowercase()) {
            Some(ranges) => Ok(ranges.clone()),
            None => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }
}
