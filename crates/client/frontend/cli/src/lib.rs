//! Terminal UI frontend for dexdle.
//!
//! [`CliFrontend`] implements [`client_frontend_core::Frontend`]: it owns the
//! terminal for the lifetime of a game and drives the
//! [`runtime::GameService`] it is handed from keyboard input.

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
