//! Code builder utility for generating properly indented code.

/// Indentation unit for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Two spaces, the TypeScript default.
    pub const TYPESCRIPT: Indent = Indent("  ");

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::TYPESCRIPT
    }
}

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use sprig_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("function main() {")
///     .indent()
///     .line("console.log(\"hello\");")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function main() {\n  console.log(\"hello\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    ///
    /// An empty string produces a blank line with no indentation.
    pub fn line(mut self, s: &str) -> Self {
        if s.is_empty() {
            return self.blank();
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lines() {
        let code = CodeBuilder::typescript().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::typescript()
            .line("{")
            .indent()
            .line("inner")
            .indent()
            .line("deeper")
            .dedent()
            .dedent()
            .line("}")
            .build();
        assert_eq!(code, "{\n  inner\n    deeper\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::typescript().dedent().line("top").build();
        assert_eq!(code, "top\n");
    }

    #[test]
    fn test_empty_line_is_blank() {
        let code = CodeBuilder::typescript()
            .indent()
            .line("a")
            .line("")
            .line("b")
            .build();
        assert_eq!(code, "  a\n\n  b\n");
    }

    #[test]
    fn test_when() {
        let code = CodeBuilder::typescript()
            .when(true, |b| b.line("included"))
            .when(false, |b| b.line("skipped"))
            .build();
        assert_eq!(code, "included\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::typescript()
            .each(["a", "b"], |b, item| b.line(item))
            .build();
        assert_eq!(code, "a\nb\n");
    }
}
