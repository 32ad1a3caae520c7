//! TypeScript AST builders.
//!
//! Each node renders through [`CodeBuilder`]; composed files assemble nodes
//! into a [`crate::SourceFile`] rather than concatenating template strings.

mod consts;
mod exports;
mod fns;
mod imports;
mod types;

pub use consts::Const;
pub use exports::Export;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use types::{Field, ObjectType};

use crate::builder::CodeBuilder;

/// A node that can render itself into a [`CodeBuilder`].
pub trait Render {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder;

    /// Build the node as a string with TypeScript indentation.
    fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}
