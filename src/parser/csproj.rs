//! .csproj parser
//!
//! Extracts `PackageReference` items from MSBuild project files, both
//! SDK-style and legacy ones that carry the MSBuild XML namespace.
//!
//! Format example:
//! ```text
//! <Project Sdk="Microsoft.NET.Sdk">
//!   <ItemGroup>
//!     <PackageReference Include="Newtonsoft.Json" Version="13.0.3" />
//!   </ItemGroup>
//! </Project>
//! ```

use tracing::{debug, warn};

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::{Dependency, is_marker_file};

const PACKAGE_REFERENCE: &str = "PackageReference";

/// Parser for .csproj files
pub struct CsprojParser;

impl CsprojParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsprojParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for CsprojParser {
    fn can_parse(&self, file_name: &str) -> bool {
        is_marker_file(file_name)
    }

    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ParseError> {
        let content = content.trim_start_matches('\u{feff}');
        let document = roxmltree::Document::parse(content).inspect_err(|e| {
            warn!("Failed to parse project XML: {}", e);
        })?;

        // Local name only, so `msb:PackageReference` and namespaced legacy projects match too
        let dependencies: Vec<Dependency> = document
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == PACKAGE_REFERENCE)
            .map(|node| Dependency::new(node.attribute("Include"), node.attribute("Version")))
            .collect();

        debug!("Found {} package references", dependencies.len());
        Ok(dependencies)
    }
}
