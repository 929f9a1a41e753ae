//! Latest version lookup
//!
//! Combines a registry fetch with [`select_latest`]. Every failure is logged
//! and turned into `None`: a missing latest version only means that no
//! comparison is possible for that package.

use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::numeric::select_latest;
use crate::version::registry::Registry;

/// Fetch the registration index of `package_name` and select its latest version
///
/// The latest version is the highest `upper` bound across the index items,
/// returned exactly as the registry spells it (pre-release suffix included).
pub async fn try_latest_version(
    registry: &dyn Registry,
    package_name: &str,
) -> Result<Option<String>, RegistryError> {
    let ranges = registry.fetch_version_ranges(package_name).await?;
    let uppers: Vec<&str> = ranges.iter().map(|r| r.upper.as_str()).collect();

    select_latest(&uppers).map_err(|e| RegistryError::InvalidResponse(e.to_string()))
}

/// Same as [`try_latest_version`], with failures absorbed into `None`
pub async fn latest_version(registry: &dyn Registry, package_name: &str) -> Option<String> {
    match try_latest_version(registry, package_name).await {
        Ok(latest) => {
            debug!("Latest version of {}: {:?}", package_name, latest);
            latest
        }
        Err(e) => {
            warn!("Failed to resolve latest version of {}: {}", package_name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::registry::MockRegistry;
    use crate::version::types::VersionRange;

    #[tokio::test]
    async fn latest_version_selects_highest_upper_bound() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_version_ranges()
            .times(1)
            .returning(|name| {
                assert_eq!(name, "Serilog");
                Ok(vec![
                    VersionRange::new("1.0.0", "1.2.0"),
                    VersionRange::new("1.3.0", "1.10.0"),
                    VersionRange::new("1.2.0-alpha", "1.2.0-beta"),
                ])
            });

        assert_eq!(
            latest_version(&registry, "Serilog").await,
            Some("1.10.0".to_string())
        );
    }

    #[tokio::test]
    async fn latest_version_returns_none_when_fetch_fails() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_version_ranges()
            .returning(|name| Err(RegistryError::NotFound(name.to_string())));

        assert_eq!(latest_version(&registry, "Missing").await, None);
    }

    #[tokio::test]
    async fn latest_version_returns_none_for_unparsable_upper_bound() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_version_ranges()
            .returning(|_| Ok(vec![VersionRange::new("1.0.0", "latest")]));

        assert_eq!(latest_version(&registry, "Odd").await, None);
    }

    #[tokio::test]
    async fn try_latest_version_reports_unparsable_upper_bound() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_version_ranges()
            .returning(|_| Ok(vec![VersionRange::new("1.0.0", "latest")]));

        let result = try_latest_version(&registry, "Odd").await;

        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn latest_version_returns_none_for_empty_index() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_version_ranges()
            .returning(|_| Ok(vec![]));

        assert_eq!(latest_version(&registry, "Empty").await, None);
    }
}
