//! CLI command handlers

pub mod commands;

pub use commands::{report, OutputFormat};
