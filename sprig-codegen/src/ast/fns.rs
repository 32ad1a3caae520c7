//! TypeScript function builder.

use super::Render;
use crate::builder::CodeBuilder;

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    exported: bool,
    default_export: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            default_export: false,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    /// Do not export the function.
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Emit as the module's default export.
    pub fn default_export(mut self, default: bool) -> Self {
        self.default_export = default;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body. Lines may carry their own nested
    /// indentation; an empty line renders blank.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    fn signature(&self) -> String {
        let export = match (self.exported, self.default_export) {
            (true, true) => "export default ",
            (true, false) => "export ",
            (false, _) => "",
        };
        let async_kw = if self.is_async { "async " } else { "" };

        let params_str = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}{}function {}({}): {} {{",
                export, async_kw, self.name, params_str, ret
            ),
            None => format!(
                "{}{}function {}({}) {{",
                export, async_kw, self.name, params_str
            ),
        }
    }
}

impl Render for Fn {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = builder.line(&self.signature()).indent();
        let builder = self.body.iter().fold(builder, |b, line| b.line(line));
        builder.dedent().line("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_export() {
        let f = Fn::new("Widget").build();
        assert!(f.starts_with("export function Widget() {\n"));
        assert!(f.ends_with("}\n"));
    }

    #[test]
    fn test_default_export() {
        let f = Fn::new("Widget").default_export(true).build();
        assert!(f.starts_with("export default function Widget() {"));
    }

    #[test]
    fn test_private_fn() {
        let f = Fn::new("helper").private().build();
        assert!(f.starts_with("function helper() {"));
    }

    #[test]
    fn test_typed_param_and_return() {
        let f = Fn::new("loader")
            .async_()
            .param(Param::new("{ request }", "LoaderFunctionArgs"))
            .returns("Promise<Response>")
            .build();
        assert!(f.contains(
            "export async function loader({ request }: LoaderFunctionArgs): Promise<Response> {"
        ));
    }

    #[test]
    fn test_body_indentation() {
        let f = Fn::new("Widget")
            .body_line("return (")
            .body_line("  <div />")
            .body_line(");")
            .build();
        assert_eq!(
            f,
            "export function Widget() {\n  return (\n    <div />\n  );\n}\n"
        );
    }

    #[test]
    fn test_multiline_body() {
        let f = Fn::new("Widget")
            .body("return (\n  <div />\n);")
            .build();
        assert_eq!(
            f,
            "export function Widget() {\n  return (\n    <div />\n  );\n}\n"
        );
    }

    #[test]
    fn test_blank_body_line() {
        let f = Fn::new("Widget")
            .body_line("const x = 1;")
            .body_line("")
            .body_line("return x;")
            .build();
        assert!(f.contains("  const x = 1;\n\n  return x;\n"));
    }
}
