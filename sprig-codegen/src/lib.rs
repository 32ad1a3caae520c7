//! Code-generation model for sprig.
//!
//! Composition is a builder over an intermediate syntax model: framework
//! crates assemble [`SourceFile`]s out of AST nodes ([`ast`]), each section
//! toggled by a feature flag, and rendering happens in one place. The
//! [`fmt`] module validates and normalizes the rendered text, and [`layout`]
//! decides where the resulting files land on disk.

pub mod ast;
pub mod builder;
pub mod fmt;
pub mod layout;
pub mod source_file;

pub use builder::{CodeBuilder, Indent};
pub use source_file::SourceFile;
