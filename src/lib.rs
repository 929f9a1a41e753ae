//! Scans a GitHub account's repositories for `.csproj` files and reports
//! package references that lag behind the latest version on NuGet.
//!
//! # Modules
//!
//! - [`app`]: Runs the scan over every repository of the account
//! - [`config`]: Runtime configuration and constants
//! - [`encoding`]: Content-Encoding aware body decoding
//! - [`logging`]: tracing subscriber setup
//! - [`parser`]: Marker file detection and `.csproj` parsing
//! - [`report`]: Report events and their console rendering
//! - [`scan`]: Tree walking, marker detection and dependency extraction
//! - [`source`]: Remote repository listing (GitHub contents API)
//! - [`version`]: Package index access and latest version selection

pub mod app;
pub mod config;
pub mod encoding;
pub mod logging;
pub mod parser;
pub mod report;
pub mod scan;
pub mod source;
pub mod version;
