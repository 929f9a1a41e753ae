//! Registry implementations for fetching package versions

pub mod nuget;

pub use nuget::NuGetRegistry;
