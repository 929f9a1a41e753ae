//! Account-wide scan
//!
//! Lists the user's repositories, keeps the ones that contain project files
//! and runs the dependency extractor on each of them, one after the other.

use tracing::{debug, error, info};

use crate::report::{ReportEvent, Reporter};
use crate::scan::extractor::DependencyExtractor;
use crate::scan::scanner::contains_marker_file;
use crate::source::error::SourceError;
use crate::source::traits::RepositorySource;

/// Counters for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Repositories returned by the listing
    pub repositories: usize,
    /// Repositories containing at least one marker file
    pub with_projects: usize,
    /// Repositories whose extraction stopped at a malformed project file
    pub aborted: usize,
    pub dependencies: usize,
    pub outdated: usize,
}

/// Scan every repository of the account.
///
/// Only a failure to list the repositories is returned; everything below
/// that is reported and skipped.
pub async fn run<S>(
    source: &S,
    extractor: &DependencyExtractor,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, SourceError>
where
    S: RepositorySource + ?Sized,
{
    let repositories = source.list_repositories().await?;
    let mut summary = RunSummary {
        repositories: repositories.len(),
        ..RunSummary::default()
    };

    if repositories.is_empty() {
        reporter.report(ReportEvent::NoRepositories);
        return Ok(summary);
    }

    for repository in &repositories {
        if !contains_marker_file(source, repository).await {
            debug!("No project files in {}", repository.full_name);
            continue;
        }

        summary.with_projects += 1;
        reporter.report(ReportEvent::Repository {
            full_name: repository.full_name.clone(),
        });

        match extractor
            .extract_and_report(source, repository, reporter)
            .await
        {
            Ok(extracted) => {
                summary.dependencies += extracted.dependencies;
                summary.outdated += extracted.outdated;
            }
            Err(e) => {
                error!("Stopped extracting {}: {}", repository.full_name, e);
                summary.aborted += 1;
            }
        }
    }

    info!(
        "Scanned {} repositories, {} with project files: {} dependencies, {} outdated",
        summary.repositories, summary.with_projects, summary.dependencies, summary.outdated
    );
    Ok(summary)
}
