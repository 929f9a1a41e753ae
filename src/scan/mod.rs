//! Repository scanning
//!
//! # Modules
//!
//! - [`walker`]: Lazy depth-first walk over a remote repository tree
//! - [`scanner`]: Decides whether a repository contains project files
//! - [`extractor`]: Extracts and checks the package references of every project file

pub mod extractor;
pub mod scanner;
pub mod walker;

pub use extractor::{DependencyExtractor, ExtractError, ExtractSummary};
pub use scanner::contains_marker_file;
pub use walker::{WalkEvent, walk};
