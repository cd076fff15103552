//! Common utilities for the Koala style engine.
//!
//! This crate provides shared infrastructure used by the style crates:
//! - **Warning System** - deduplicated, colored diagnostics for ignored or
//!   unsupported CSS input

pub mod warning;
