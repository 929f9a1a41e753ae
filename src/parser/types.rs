//! Common types for parsers

use crate::config::{MARKER_EXTENSION, MARKER_SUBSTRING};

/// A package reference declared in a project file
///
/// Both attributes are optional in MSBuild: `Include` may be replaced by
/// `Update`, and `Version` may come from central package management.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name from the `Include` attribute
    pub name: Option<String>,
    /// Declared version from the `Version` attribute
    pub declared_version: Option<String>,
}

impl Dependency {
    pub fn new(name: Option<&str>, declared_version: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            declared_version: declared_version.map(str::to_string),
        }
    }
}

/// Whether a file name makes its repository worth scanning.
///
/// Deliberately loose: `App.csproj.user` or `csproj-notes.txt` count too.
pub fn is_marker_candidate(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().contains(MARKER_SUBSTRING)
}

/// Whether a file is a project file whose dependencies get extracted.
pub fn is_marker_file(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(MARKER_EXTENSION)
}
