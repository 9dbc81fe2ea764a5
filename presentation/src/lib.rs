//! Presentation layer for commons-council
//!
//! This crate contains CLI definitions, the HTTP surface and console
//! output formatting.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use http::{HttpOptions, router};
pub use output::console::ConsoleFormatter;
