//! Remote repository access
//!
//! - traits.rs: `RepositorySource` trait (list repositories, list directories, fetch files)
//! - types.rs: Repository and directory entry types
//! - github.rs: GitHub REST API implementation
//! - error.rs: Error type for listing and download failures

pub mod error;
pub mod github;
pub mod traits;
pub mod types;

pub use error::SourceError;
pub use github::GitHubSource;
pub use traits::RepositorySource;
pub use types::{DirectoryEntry, EntryKind, Owner, Repository};
