//! GitHub REST API repository source

use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use crate::config::{REPOSITORIES_PER_PAGE, USER_AGENT};
use crate::source::error::SourceError;
use crate::source::traits::RepositorySource;
use crate::source::types::{DirectoryEntry, Repository};

const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

/// Repository source backed by the GitHub REST API
pub struct GitHubSource {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubSource {
    /// Creates a new GitHubSource with a custom base URL and access token
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn contents_url(&self, repository: &Repository, path: &str) -> String {
        let base = format!(
            "{}/repos/{}/{}/contents",
            self.base_url, repository.owner.login, repository.name
        );
        if path.is_empty() {
            base
        } else {
            format!("{}/{}", base, encode_path(path))
        }
    }

    async fn get(&self, url: &str, accept: &str) -> Result<reqwest::Response, SourceError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, accept)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SourceError::Unauthorized);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url.to_string()));
        }

        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .is_some_and(|v| v.as_bytes() == b"0");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && rate_limit_exhausted)
        {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(SourceError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        Ok(response)
    }
}

#[async_trait::async_trait]
impl RepositorySource for GitHubSource {
    async fn list_repositories(&self) -> Result<Vec<Repository>, SourceError> {
        let url = format!(
            "{}/user/repos?per_page={}",
            self.base_url, REPOSITORIES_PER_PAGE
        );

        let repositories: Vec<Repository> =
            self.get(&url, JSON_MEDIA_TYPE)
                .await?
                .json()
                .await
                .map_err(|e| {
                    warn!("Failed to parse repository list: {}", e);
                    SourceError::InvalidResponse(e.to_string())
                })?;

        debug!("Listed {} repositories", repositories.len());
        Ok(repositories)
    }

    async fn list_directory(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<Vec<DirectoryEntry>, SourceError> {
        let url = self.contents_url(repository, path);
        debug!("Listing {}", url);

        // A file path yields an object instead of an array and fails here
        self.get(&url, JSON_MEDIA_TYPE)
            .await?
            .json()
            .await
            .map_err(|e| {
                warn!("Failed to parse directory listing of {}: {}", url, e);
                SourceError::InvalidResponse(e.to_string())
            })
    }

    async fn fetch_file(
        &self,
        repository: &Repository,
        path: &str,
        entry: &DirectoryEntry,
    ) -> Result<String, SourceError> {
        // Without a download URL, ask the contents API for the raw media type
        let (url, accept) = match &entry.download_url {
            Some(url) => (url.clone(), JSON_MEDIA_TYPE),
            None => (self.contents_url(repository, path), RAW_MEDIA_TYPE),
        };
        debug!("Downloading {}", url);

        Ok(self.get(&url, accept).await?.text().await?)
    }
}

/// Percent-encode the characters of a repository path that would otherwise
/// change the meaning of the URL.
fn encode_path(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            ' ' => encoded.push_str("%20"),
            '#' => encoded.push_str("%23"),
            '?' => encoded.push_str("%3F"),
            _ => encoded.push(c),
        }
    }
    encoded
}
