use thiserror::Error;

// =============================================================================
// Remote endpoints
// =============================================================================

/// Default base URL for the GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default base URL for the NuGet v3 API
pub const DEFAULT_NUGET_API_URL: &str = "https://api.nuget.org/v3";

/// Page size requested when listing the user's repositories.
/// Only the first page is ever fetched.
pub const REPOSITORIES_PER_PAGE: u32 = 1000;

/// User-Agent sent with every request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("csproj-outdated/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Marker files
// =============================================================================

/// Substring that makes a repository worth scanning (matched case-insensitively)
pub const MARKER_SUBSTRING: &str = "csproj";

/// Extension of the files whose package references are extracted
pub const MARKER_EXTENSION: &str = ".csproj";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GitHub token is missing.")]
    MissingToken,
}

/// Runtime configuration resolved from CLI flags and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub github_api_url: String,
    pub nuget_api_url: String,
}

impl Config {
    /// Builds a configuration, rejecting a missing or blank token.
    ///
    /// Trailing slashes are trimmed from the base URLs so paths can be
    /// appended with a single `/`.
    pub fn new(
        token: Option<String>,
        github_api_url: &str,
        nuget_api_url: &str,
    ) -> Result<Self, ConfigError> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            token,
            github_api_url: github_api_url.trim_end_matches('/').to_string(),
            nuget_api_url: nuget_api_url.trim_end_matches('/').to_string(),
        })
    }
}
