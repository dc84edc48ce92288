//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the [`UiFrame`] (or input
//! state) and renders to a terminal frame. No widget mutates state.
//!
//! [`UiFrame`]: client_frontend_core::UiFrame

pub mod footer;
pub mod guess_input;
pub mod header;
pub mod messages;
pub mod results;
