//! TypeScript const declaration builder.

use super::Render;
use crate::builder::CodeBuilder;

/// Builder for TypeScript const declarations.
///
/// Multiline values keep their embedded indentation; the closing `;` is
/// appended to the final value line.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Do not export the const.
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Render for Const {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let export = if self.exported { "export " } else { "" };
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };

        let mut lines = self.value.lines();
        let first = lines.next().unwrap_or_default();
        let rest: Vec<&str> = lines.collect();

        let opening = format!("{}const {}{} = {}", export, self.name, type_annotation, first);
        match rest.split_last() {
            None => builder.line(&format!("{};", opening)),
            Some((last, middle)) => builder
                .line(&opening)
                .each(middle, |b, line| b.line(line))
                .line(&format!("{};", last)),
        }
    }
}
