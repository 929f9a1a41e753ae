//! Depth-first walk over a remote repository tree
//!
//! The walk keeps an explicit stack of partially consumed directory listings
//! instead of recursing, and yields entries lazily: a directory is listed only
//! when the consumer polls past the entry that names it. Consumers that stop
//! early (the marker scan) never fetch the rest of the tree.

use futures::stream::{self, Stream};
use tracing::debug;

use crate::source::error::SourceError;
use crate::source::traits::RepositorySource;
use crate::source::types::{DirectoryEntry, Repository, join_path};

/// Item produced by [`walk`]
#[derive(Debug)]
pub enum WalkEvent {
    /// An entry of some directory, with its repository-relative path
    Entry { path: String, entry: DirectoryEntry },
    /// A directory could not be listed; its subtree is skipped
    ListingFailed { path: String, error: SourceError },
}

/// A listed directory whose entries are still being handed out
struct Frame {
    path: String,
    entries: std::vec::IntoIter<DirectoryEntry>,
}

struct WalkState {
    /// Directory to list before handing out the next entry
    pending: Option<String>,
    stack: Vec<Frame>,
}

impl WalkState {
    fn new() -> Self {
        Self {
            pending: Some(String::new()),
            stack: Vec::new(),
        }
    }

    async fn advance<S>(&mut self, source: &S, repository: &Repository) -> Option<WalkEvent>
    where
        S: RepositorySource + ?Sized,
    {
        if let Some(path) = self.pending.take() {
            match source.list_directory(repository, &path).await {
                Ok(entries) => {
                    debug!(
                        "Listed {} entries in {}:/{}",
                        entries.len(),
                        repository.full_name,
                        path
                    );
                    self.stack.push(Frame {
                        path,
                        entries: entries.into_iter(),
                    });
                }
                Err(error) => return Some(WalkEvent::ListingFailed { path, error }),
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            let next = frame
                .entries
                .next()
                .map(|entry| (join_path(&frame.path, &entry.name), entry));

            let Some((path, entry)) = next else {
                self.stack.pop();
                continue;
            };

            // Descend before moving on to later siblings
            if entry.is_directory() {
                self.pending = Some(path.clone());
            }
            return Some(WalkEvent::Entry { path, entry });
        }
    }
}

/// Walk `repository` depth-first from its root, in listing order.
///
/// Directories are yielded before their contents. A failed listing yields a
/// single [`WalkEvent::ListingFailed`] and the walk continues with the next
/// sibling of the failed directory.
pub fn walk<'a, S>(
    source: &'a S,
    repository: &'a Repository,
) -> impl Stream<Item = WalkEvent> + 'a
where
    S: RepositorySource + ?Sized,
{
    stream::unfold(WalkState::new(), move |mut state| async move {
        let event = state.advance(source, repository).await?;
        Some((event, state))
    })
}
