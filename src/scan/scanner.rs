//! Marker file detection

use std::pin::pin;

use futures::StreamExt;
use tracing::debug;

use crate::parser::types::is_marker_candidate;
use crate::scan::walker::{WalkEvent, walk};
use crate::source::traits::RepositorySource;
use crate::source::types::Repository;

/// Whether any file in `repository` has a name containing "csproj".
///
/// Stops at the first match, so only the directories walked before it are
/// listed. Directories that cannot be listed count as having no match.
pub async fn contains_marker_file<S>(source: &S, repository: &Repository) -> bool
where
    S: RepositorySource + ?Sized,
{
    let mut events = pin!(walk(source, repository));

    while let Some(event) = events.next().await {
        match event {
            WalkEvent::Entry { path, entry } if entry.is_file() && is_marker_candidate(&entry.name) => {
                debug!("Marker file in {}: {}", repository.full_name, path);
                return true;
            }
            WalkEvent::Entry { .. } => {}
            WalkEvent::ListingFailed { path, error } => {
                debug!(
                    "Skipping {}:/{} while looking for marker files: {}",
                    repository.full_name, path, error
                );
            }
        }
    }

    false
}
