//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, data-source assembly, and game service
//! setup that can be reused by the terminal client or any other front-end.
pub mod builder;
pub mod config;
pub mod dirs;

pub use builder::{ServiceBuilder, ServiceSetup};
pub use config::{RuntimeConfig, SourceKind};
