//! Repository source test utilities

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use csproj_outdated::source::error::SourceError;
use csproj_outdated::source::traits::RepositorySource;
use csproj_outdated::source::types::{DirectoryEntry, Repository, join_path};

type Key = (String, String);

/// In-memory repository host built from file paths
#[derive(Default)]
pub struct FakeSource {
    repositories: Vec<Repository>,
    directories: HashMap<Key, Vec<DirectoryEntry>>,
    failing: HashSet<Key>,
    files: HashMap<Key, String>,
    listed: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repository with an empty root directory
    pub fn with_repository(mut self, repository: &Repository) -> Self {
        self.register(repository);
        self
    }

    /// Add a file, creating every directory on its path.
    /// Entries appear in their directory in insertion order.
    pub fn with_file(mut self, repository: &Repository, path: &str, content: &str) -> Self {
        self.add_path(repository, path, false);
        self.files
            .insert(key(repository, path), content.to_string());
        self
    }

    /// Add an empty directory, creating every directory on its path
    pub fn with_directory(mut self, repository: &Repository, path: &str) -> Self {
        self.add_path(repository, path, true);
        self
    }

    /// Add a directory whose listing fails
    pub fn with_failing_directory(mut self, repository: &Repository, path: &str) -> Self {
        self.add_path(repository, path, true);
        self.failing.insert(key(repository, path));
        self
    }

    /// Paths listed so far, as "owner/repo:/path"
    pub fn listed(&self) -> Vec<String> {
        self.listed.lock().unwrap().clone()
    }

    fn register(&mut self, repository: &Repository) {
        if !self.repositories.contains(repository) {
            self.repositories.push(repository.clone());
        }
        self.directories.entry(key(repository, "")).or_default();
    }

    fn add_path(&mut self, repository: &Repository, path: &str, is_directory: bool) {
        self.register(repository);

        let segments: Vec<&str> = path.split('/').collect();
        let mut parent = String::new();
        for (i, segment) in segments.iter().enumerate() {
            let is_last = i + 1 == segments.len();
            let entry = if is_last && !is_directory {
                DirectoryEntry::file(segment)
            } else {
                DirectoryEntry::directory(segment)
            };

            let listing = self.directories.entry(key(repository, &parent)).or_default();
            if !listing.iter().any(|e| e.name == entry.name) {
                listing.push(entry);
            }

            parent = join_path(&parent, segment);
            if !is_last || is_directory {
                self.directories.entry(key(repository, &parent)).or_default();
            }
        }
    }
}

fn key(repository: &Repository, path: &str) -> Key {
    (repository.full_name.clone(), path.to_string())
}

#[async_trait]
impl RepositorySource for FakeSource {
    async fn list_repositories(&self) -> Result<Vec<Repository>, SourceError> {
        Ok(self.repositories.clone())
    }

    async fn list_directory(
        &self,
        repository: &Repository,
        path: &str,
    ) -> Result<Vec<DirectoryEntry>, SourceError> {
        self.listed
            .lock()
            .unwrap()
            .push(format!("{}:/{}", repository.full_name, path));

        let key = key(repository, path);
        if self.failing.contains(&key) {
            return Err(SourceError::RateLimited {
                retry_after_secs: None,
            });
        }
        self.directories
            .get(&key)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_string()))
    }

    async fn fetch_file(
        &self,
        repository: &Repository,
        path: &str,
        _entry: &DirectoryEntry,
    ) -> Result<String, SourceError> {
        self.files
            .get(&key(repository, path))
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_string()))
    }
}
