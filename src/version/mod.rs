//! Version management layer for package version checking
//!
//! Fetches registration indexes from the package registry, picks the latest
//! version out of them and compares it with what a project declares.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Resolver   │────▶│   Checker   │
//! │  (fetch)    │     │  (select)   │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │   Numeric   │
//! │   (nuget)   │     │ (ordering)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Declared vs latest comparison and status
//! - [`error`]: Error types for registry operations
//! - [`numeric`]: Dotted numeric version parsing and latest selection
//! - [`registry`]: Registry trait for fetching version ranges
//! - [`registries`]: Concrete registry implementations (NuGet)
//! - [`resolver`]: Failure-absorbing latest version lookup
//! - [`types`]: Common types like `VersionRange`

pub mod checker;
pub mod error;
pub mod numeric;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod types;
