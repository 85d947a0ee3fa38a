//! Markweft Core — shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Markweft
//! crates. It has no internal Markweft dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: File and ID utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::files::find_markdown_files;
pub use util::ids::stable_id;
