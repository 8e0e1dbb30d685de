//! CLI command handlers

pub mod commands;

pub use commands::{coverage, enrich, handle};
