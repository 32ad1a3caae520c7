//! Structured source-file model.
//!
//! A [`SourceFile`] holds the ordered logical sections of a generated file:
//! an optional leading directive, imports, body sections, and trailing
//! exports. Flag logic decides *what* goes in; rendering happens here in one
//! place.

use crate::ast::{Export, Import, Render};

/// A structured representation of a TypeScript source file.
///
/// # Example
///
/// ```
/// use sprig_codegen::SourceFile;
/// use sprig_codegen::ast::{Fn, Import};
///
/// let code = SourceFile::new()
///     .import(Import::new("react").named("useState"))
///     .section(&Fn::new("Widget").body_line("return null;"))
///     .render();
/// assert!(code.starts_with("import { useState } from \"react\";\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    directive: Option<String>,
    imports: Vec<Import>,
    sections: Vec<String>,
    exports: Vec<Export>,
}

impl SourceFile {
    /// Create a new empty source file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading directive literal, emitted before all imports
    /// (e.g. `"use client";`).
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = Some(directive.into());
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Conditionally add an import statement.
    pub fn import_if(self, condition: bool, import: Import) -> Self {
        if condition { self.import(import) } else { self }
    }

    /// Add a body section.
    pub fn section(mut self, node: &impl Render) -> Self {
        self.sections.push(node.build());
        self
    }

    /// Conditionally add a body section.
    pub fn section_if(self, condition: bool, node: &impl Render) -> Self {
        if condition { self.section(node) } else { self }
    }

    /// Add a trailing export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Check if the file has no content.
    pub fn is_empty(&self) -> bool {
        self.directive.is_none()
            && self.imports.is_empty()
            && self.sections.is_empty()
            && self.exports.is_empty()
    }

    /// Render the file: directive, imports, body sections, exports, with a
    /// blank line between groups and between body sections.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let has_rest =
            !self.imports.is_empty() || !self.sections.is_empty() || !self.exports.is_empty();
        if let Some(directive) = &self.directive {
            out.push_str(directive);
            out.push('\n');
            if has_rest {
                out.push('\n');
            }
        }

        for import in &self.imports {
            out.push_str(&import.build());
        }
        if !self.imports.is_empty() && (!self.sections.is_empty() || !self.exports.is_empty()) {
            out.push('\n');
        }

        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(section);
        }

        if !self.sections.is_empty() && !self.exports.is_empty() {
            out.push('\n');
        }
        for export in &self.exports {
            out.push_str(&export.build());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Fn, ObjectType};

    #[test]
    fn test_empty_file() {
        let file = SourceFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_imports_then_body() {
        let code = SourceFile::new()
            .import(Import::new("react").named("useState"))
            .section(&Fn::new("Widget").body_line("return null;"))
            .render();
        assert_eq!(
            code,
            "import { useState } from \"react\";\n\nexport function Widget() {\n  return null;\n}\n"
        );
    }

    #[test]
    fn test_directive_precedes_imports() {
        let code = SourceFile::new()
            .directive("\"use client\";")
            .import(Import::new("react").named("useState"))
            .render();
        assert!(code.starts_with("\"use client\";\n\nimport { useState }"));
    }

    #[test]
    fn test_blank_line_between_sections() {
        let code = SourceFile::new()
            .section(&ObjectType::new("WidgetProps").placeholder("props"))
            .section(&Fn::new("Widget").body_line("return null;"))
            .render();
        assert!(code.contains("};\n\nexport function Widget()"));
    }

    #[test]
    fn test_trailing_export() {
        let code = SourceFile::new()
            .section(&Fn::new("Widget").body_line("return null;"))
            .export(Export::new().from("./helpers"))
            .render();
        assert!(code.ends_with("}\n\nexport * from \"./helpers\";\n"));
    }

    #[test]
    fn test_directive_only() {
        let code = SourceFile::new().directive("\"use client\";").render();
        assert_eq!(code, "\"use client\";\n");
    }
}
