//! Report events and their rendering
//!
//! Scanning code never prints. It hands [`ReportEvent`]s to a [`Reporter`],
//! which decides where they go: the console in the binary, a vector in tests.

use std::io::{self, Write};

use tracing::warn;

use crate::parser::types::Dependency;
use crate::version::checker::VersionCheck;

const MISSING: &str = "(missing)";

/// Something worth telling the user about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// The account has no repositories
    NoRepositories,
    /// The repository list could not be fetched
    RunFailed { reason: String },
    /// A repository containing project files is about to be extracted
    Repository { full_name: String },
    /// A project file was found
    MarkerFile { path: String, name: String },
    /// Header before the dependencies of a project file
    Dependencies { file: String },
    /// A project file declares no package references
    NoDependencies { file: String },
    /// One package reference and the outcome of its version check
    Dependency {
        dependency: Dependency,
        check: VersionCheck,
    },
    /// A directory listing failed; its subtree was skipped
    ListingFailed { path: String },
    /// A project file could not be downloaded; it was skipped
    FileFailed { path: String },
    /// A project file is malformed; the rest of the repository was skipped
    ParseFailed { path: String, reason: String },
}

/// Sink for report events
pub trait Reporter {
    fn report(&mut self, event: ReportEvent);
}

/// Renders events as indented text lines
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &ReportEvent) -> io::Result<()> {
        match event {
            ReportEvent::NoRepositories => writeln!(self.out, "No repositories found."),
            ReportEvent::RunFailed { reason } => writeln!(self.out, "Error: {}", reason),
            ReportEvent::Repository { full_name } => {
                writeln!(self.out, "Repository: {}", full_name)
            }
            ReportEvent::MarkerFile { name, .. } => {
                writeln!(self.out, "  Found .csproj: {}", name)
            }
            ReportEvent::Dependencies { file } => {
                writeln!(self.out, "  Dependencies in {}:", file)
            }
            ReportEvent::NoDependencies { .. } => {
                writeln!(self.out, "  No dependencies found in this .csproj.")
            }
            ReportEvent::Dependency { dependency, check } => {
                writeln!(
                    self.out,
                    "    - {}, Version: {}",
                    dependency.name.as_deref().unwrap_or(MISSING),
                    dependency.declared_version.as_deref().unwrap_or(MISSING)
                )?;
                if check.is_outdated() {
                    writeln!(
                        self.out,
                        "    (Outdated) - Latest Version: {}, Current Version: {}",
                        check.latest_version.as_deref().unwrap_or(MISSING),
                        check.declared_version.as_deref().unwrap_or(MISSING)
                    )?;
                }
                Ok(())
            }
            ReportEvent::ListingFailed { path } => {
                writeln!(self.out, "  Failed to fetch content from /{}", path)
            }
            ReportEvent::FileFailed { path } => {
                writeln!(self.out, "  Failed to download /{}", path)
            }
            ReportEvent::ParseFailed { path, reason } => {
                writeln!(self.out, "  Failed to parse /{}: {}", path, reason)
            }
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: ReportEvent) {
        if let Err(e) = self.write_event(&event).and_then(|_| self.out.flush()) {
            warn!("Failed to write report line: {}", e);
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub events: Vec<ReportEvent>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dependency events only, in report order
    pub fn dependencies(&self) -> Vec<(&Dependency, &VersionCheck)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Dependency { dependency, check } => Some((dependency, check)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, event: ReportEvent) {
        self.events.push(event);
    }
}
