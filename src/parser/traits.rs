//! Parser trait definition

use crate::parser::types::Dependency;

/// Trait for parsing project files
pub trait Parser: Send + Sync {
    /// Check if this parser can handle a file with the given name
    fn can_parse(&self, file_name: &str) -> bool;

    /// Parse the content and extract the declared dependencies, in document order
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The content is not well-formed XML
    #[error("Invalid XML: {0}")]
    InvalidXml(#[from] roxmltree::Error),
}
