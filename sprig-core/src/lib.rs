//! Core primitives for the sprig scaffolding generator.
//!
//! This crate provides the string-case converter and the planned-file
//! model shared by the framework generators and the CLI.

mod file;
mod naming;

// File operations
pub use file::{PlannedFile, exists};
// Naming conversion
pub use naming::{Case, InvalidName, capitalize, convert};
