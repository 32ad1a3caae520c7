//! TypeScript export builder.

use super::Render;
use crate::builder::CodeBuilder;

/// Builder for standalone TypeScript export statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    from: Option<String>,
    default: Option<String>,
    named: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Re-export from another module (`export * from "module"` when no
    /// named items are given).
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Export as default.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }
}

impl Render for Export {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let export_str = match (&self.from, &self.default, self.named.is_empty()) {
            (Some(from), None, true) => {
                format!("export * from \"{}\";", from)
            }
            (Some(from), None, false) => {
                format!("export {{ {} }} from \"{}\";", self.named.join(", "), from)
            }
            (None, Some(def), true) => {
                format!("export default {};", def)
            }
            (None, None, false) => {
                format!("export {{ {} }};", self.named.join(", "))
            }
            _ => String::new(),
        };

        if export_str.is_empty() {
            builder
        } else {
            builder.line(&export_str)
        }
    }
}
