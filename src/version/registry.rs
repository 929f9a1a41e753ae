//! Registry trait for fetching package version ranges

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::VersionRange;

/// Trait for fetching the version ranges a registry knows for a package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches every version range of a package's registration index
    ///
    /// # Arguments
    /// * `package_name` - The package id as declared (e.g., "Newtonsoft.Json")
    ///
    /// # Returns
    /// * `Ok(Vec<VersionRange>)` - Ranges in index order
    /// * `Err(RegistryError)` - If the fetch, decoding or parsing fails
    async fn fetch_version_ranges(
        &self,
        package_name: &str,
    ) -> Result<Vec<VersionRange>, RegistryError>;
}
