//! Common utilities for the pagestyle engine.
//!
//! This crate provides shared infrastructure used by the style crates and the CLI:
//! - **Warning System** - deduplicated, colored terminal output for value fallbacks

pub mod warning;
