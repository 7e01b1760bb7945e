//! Nodeflow Application
//!
//! Command-line shell around the node render pass.

mod app;

pub use app::{App, AppConfig, AppError, built_in_node_types, render_document};
