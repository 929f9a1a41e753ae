//! Shared test utilities

#![allow(dead_code)]

pub mod registry;
pub mod source;

pub use registry::FakeRegistry;
pub use source::FakeSource;
