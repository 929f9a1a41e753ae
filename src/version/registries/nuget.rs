//! NuGet v3 registration API implementation

use reqwest::header::{ACCEPT_ENCODING, CONTENT_ENCODING};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{DEFAULT_NUGET_API_URL, USER_AGENT};
use crate::encoding::{ContentEncoding, decode_body};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::VersionRange;

/// Registration hive whose documents are gzipped and include SemVer 2.0.0 packages
const REGISTRATION_HIVE: &str = "registration5-gz-semver2";

/// Registration index document (only the fields we read)
#[derive(Debug, Deserialize)]
struct RegistrationIndex {
    items: Vec<VersionRange>,
}

/// Registry implementation for the NuGet registration API
pub struct NuGetRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NuGetRegistry {
    /// Creates a new NuGetRegistry with a custom base URL (e.g. "https://api.nuget.org/v3")
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn index_url(&self, package_name: &str) -> String {
        // Registration URLs use the lowercased package id
        format!(
            "{}/{}/{}/index.json",
            self.base_url,
            REGISTRATION_HIVE,
            package_name.to_lowercase()
        )
    }
}

impl Default for NuGetRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_NUGET_API_URL)
    }
}

#[async_trait::async_trait]
impl Registry for NuGetRegistry {
    async fn fetch_version_ranges(
        &self,
        package_name: &str,
    ) -> Result<Vec<VersionRange>, RegistryError> {
        let url = self.index_url(package_name);
        debug!("Fetching registration index: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT_ENCODING, "gzip, deflate")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("NuGet registry returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let encoding = ContentEncoding::from_header(
            response
                .headers()
                .get(CONTENT_ENCODING)
                .and_then(|v| v.to_str().ok()),
        );
        let body = response.bytes().await?;
        let text = decode_body(encoding, &body).inspect_err(|e| {
            warn!("Failed to decode {:?} registration index: {}", encoding, e);
        })?;

        let index: RegistrationIndex = serde_json::from_str(&text).map_err(|e| {
            warn!("Failed to parse NuGet registration index: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(index.items)
    }
}
