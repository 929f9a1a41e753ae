//! Repository source trait definition

#[cfg(test)]
use mockall::automock;

use crate::source::error::SourceError;
use crate::source::types::{DirectoryEntry, Repository};

/// Trait for reading repositories and their file trees from a remote host
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RepositorySource: Send + Sync {
    /// Lists the repositories of the authenticated user (first page only)
    async fn list_repositories(&self) -> Result<Vec<Repository>, SourceError>;

    /// Lists a directory of a repository
    ///
    /// # Arguments
    /// * `repository` - The repository to read
    /// * `path` - Repository-relative directory path; `""` is the root
    ///
    /// # Returns
    /// * `Ok(Vec<DirectoryEntry>)` - Entries in the order the host returns them
    /// * `Err(SourceError)` - If the listing cannot be fetched
    async fn list_directory(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<Vec<DirectoryEntry>, SourceError>;

    /// Downloads the content of a file found at `path`
    async fn fetch_file(
        &self,
        repository: &Repository,
        path: &str,
        entry: &DirectoryEntry,
    ) -> Result<String, SourceError>;
}
