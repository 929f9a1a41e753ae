//! Parser layer
//! - traits.rs: Parser trait definition
//! - types.rs: Common types (Dependency) and marker file name predicates
//! - csproj.rs: .csproj (MSBuild project) parser

pub mod csproj;
pub mod traits;
pub mod types;

pub use csproj::CsprojParser;
pub use traits::{ParseError, Parser};
pub use types::{Dependency, is_marker_candidate, is_marker_file};
