//! Dependency extraction and version checking
//!
//! Walks a repository, parses every project file it finds and checks each
//! package reference against the registry, reporting as it goes.

use std::pin::pin;
use std::sync::Arc;

use futures::StreamExt;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::Dependency;
use crate::report::{ReportEvent, Reporter};
use crate::scan::walker::{WalkEvent, walk};
use crate::source::traits::RepositorySource;
use crate::source::types::{DirectoryEntry, Repository};
use crate::version::checker::check_version;
use crate::version::registry::Registry;
use crate::version::resolver::latest_version;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// A project file is malformed; extraction of the repository stopped there
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
}

/// Counters for one extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files: usize,
    pub dependencies: usize,
    pub outdated: usize,
}

/// Groups the parser and registry used to check a repository's project files
pub struct DependencyExtractor {
    parser: Arc<dyn Parser>,
    registry: Arc<dyn Registry>,
}

impl DependencyExtractor {
    /// Create a new DependencyExtractor with the given components
    pub fn new(parser: Arc<dyn Parser>, registry: Arc<dyn Registry>) -> Self {
        Self { parser, registry }
    }

    /// Extract every package reference of `repository` and report it with its
    /// version check.
    ///
    /// Every project file in every directory is processed, in walk order.
    /// Listing and download failures are reported and skipped; a malformed
    /// project file ends the pass with [`ExtractError::Parse`].
    pub async fn extract_and_report<S>(
        &self,
        source: &S,
        repository: &Repository,
        reporter: &mut dyn Reporter,
    ) -> Result<ExtractSummary, ExtractError>
    where
        S: RepositorySource + ?Sized,
    {
        let mut summary = ExtractSummary::default();
        let mut events = pin!(walk(source, repository));

        while let Some(event) = events.next().await {
            match event {
                WalkEvent::Entry { path, entry }
                    if entry.is_file() && self.parser.can_parse(&entry.name) =>
                {
                    self.process_file(source, repository, &path, &entry, reporter, &mut summary)
                        .await?;
                }
                WalkEvent::Entry { .. } => {}
                WalkEvent::ListingFailed { path, error } => {
                    warn!(
                        "Failed to list {}:/{}: {}",
                        repository.full_name, path, error
                    );
                    reporter.report(ReportEvent::ListingFailed { path });
                }
            }
        }

        info!(
            "Checked {} dependencies in {} project files of {} ({} outdated)",
            summary.dependencies, summary.files, repository.full_name, summary.outdated
        );
        Ok(summary)
    }

    async fn process_file<S>(
        &self,
        source: &S,
        repository: &Repository,
        path: &str,
        entry: &DirectoryEntry,
        reporter: &mut dyn Reporter,
        summary: &mut ExtractSummary,
    ) -> Result<(), ExtractError>
    where
        S: RepositorySource + ?Sized,
    {
        reporter.report(ReportEvent::MarkerFile {
            path: path.to_string(),
            name: entry.name.clone(),
        });

        let content = match source.fetch_file(repository, path, entry).await {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Failed to download {}:/{}: {}",
                    repository.full_name, path, e
                );
                reporter.report(ReportEvent::FileFailed {
                    path: path.to_string(),
                });
                return Ok(());
            }
        };
        summary.files += 1;

        let dependencies = self.parser.parse(&content).map_err(|error| {
            reporter.report(ReportEvent::ParseFailed {
                path: path.to_string(),
                reason: error.to_string(),
            });
            ExtractError::Parse {
                path: path.to_string(),
                source: error,
            }
        })?;

        if dependencies.is_empty() {
            reporter.report(ReportEvent::NoDependencies {
                file: entry.name.clone(),
            });
            return Ok(());
        }

        reporter.report(ReportEvent::Dependencies {
            file: entry.name.clone(),
        });

        for dependency in dependencies {
            let outdated = self.check_and_report(dependency, reporter).await;
            summary.dependencies += 1;
            if outdated {
                summary.outdated += 1;
            }
        }

        Ok(())
    }

    /// Resolve the latest version of one dependency and report it.
    /// Returns whether the dependency is outdated.
    async fn check_and_report(&self, dependency: Dependency, reporter: &mut dyn Reporter) -> bool {
        let latest = match dependency.name.as_deref() {
            Some(name) => latest_version(self.registry.as_ref(), name).await,
            None => {
                debug!("Package reference without Include, skipping version lookup");
                None
            }
        };

        let check = check_version(dependency.declared_version.as_deref(), latest.as_deref());
        let outdated = check.is_outdated();
        reporter.report(ReportEvent::Dependency { dependency, check });
        outdated
    }
}
