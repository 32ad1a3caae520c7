//! Formatting of composed source text.
//!
//! Composed files are already builder-indented, so formatting is a lexical
//! validation pass (delimiter balance, terminated literals and comments)
//! followed by whitespace normalization. Callers must treat a
//! [`FormatError`] as fatal for that file: unformatted text is never
//! written to disk.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for formatting operations (boxed to keep the Ok path small).
pub type Result<T> = std::result::Result<T, Box<FormatError>>;

/// A defect in composed source text.
///
/// Any of these indicates a bug in a template composer for some flag
/// combination, so the error carries the offending file's name and the
/// exact source location for diagnosis.
#[derive(Debug, Error, Diagnostic)]
pub enum FormatError {
    #[error("unexpected closing `{found}`")]
    #[diagnostic(code(sprig::fmt::unbalanced))]
    Unbalanced {
        #[source_code]
        src: NamedSource<String>,
        #[label("closes nothing")]
        span: SourceSpan,
        found: char,
    },

    #[error("`{opened}` closed by `{found}`")]
    #[diagnostic(code(sprig::fmt::mismatched))]
    Mismatched {
        #[source_code]
        src: NamedSource<String>,
        #[label("opened here")]
        open_span: SourceSpan,
        #[label("closed here")]
        span: SourceSpan,
        opened: char,
        found: char,
    },

    #[error("unclosed `{delimiter}`")]
    #[diagnostic(code(sprig::fmt::unclosed))]
    Unclosed {
        #[source_code]
        src: NamedSource<String>,
        #[label("opened here")]
        span: SourceSpan,
        delimiter: char,
    },

    #[error("unterminated {what}")]
    #[diagnostic(code(sprig::fmt::unterminated))]
    Unterminated {
        #[source_code]
        src: NamedSource<String>,
        #[label("starts here")]
        span: SourceSpan,
        what: &'static str,
    },
}

/// Validate and normalize composed source text.
///
/// `file_name` is the destination name, used only for error reporting.
pub fn format_source(file_name: &str, text: &str) -> Result<String> {
    validate(file_name, text)?;
    Ok(normalize(text))
}

#[derive(Debug, Clone, Copy)]
enum State {
    Code,
    Str { quote: char, start: usize },
    Template { start: usize },
    LineComment,
    BlockComment { start: usize },
}

fn validate(file_name: &str, text: &str) -> Result<()> {
    let src = || NamedSource::new(file_name, text.to_string());
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut state = State::Code;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match state {
            State::Code => match c {
                '"' | '\'' => state = State::Str { quote: c, start: i },
                '`' => state = State::Template { start: i },
                '/' => match chars.peek() {
                    Some(&(_, '/')) => {
                        chars.next();
                        state = State::LineComment;
                    }
                    Some(&(_, '*')) => {
                        chars.next();
                        state = State::BlockComment { start: i };
                    }
                    _ => {}
                },
                '(' | '[' | '{' => stack.push((c, i)),
                ')' | ']' | '}' => match stack.pop() {
                    None => {
                        return Err(Box::new(FormatError::Unbalanced {
                            src: src(),
                            span: (i, 1).into(),
                            found: c,
                        }));
                    }
                    Some((opened, open_at)) => {
                        let expected = match opened {
                            '(' => ')',
                            '[' => ']',
                            _ => '}',
                        };
                        if c != expected {
                            return Err(Box::new(FormatError::Mismatched {
                                src: src(),
                                open_span: (open_at, 1).into(),
                                span: (i, 1).into(),
                                opened,
                                found: c,
                            }));
                        }
                    }
                },
                _ => {}
            },
            State::Str { quote, start } => match c {
                '\\' => {
                    chars.next();
                }
                '\n' => {
                    return Err(Box::new(FormatError::Unterminated {
                        src: src(),
                        span: (start, 1).into(),
                        what: "string literal",
                    }));
                }
                _ if c == quote => state = State::Code,
                _ => {}
            },
            State::Template { .. } => match c {
                '\\' => {
                    chars.next();
                }
                '`' => state = State::Code,
                _ => {}
            },
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                }
            }
            State::BlockComment { .. } => {
                if c == '*' && matches!(chars.peek(), Some(&(_, '/'))) {
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }

    match state {
        State::Str { start, .. } => {
            return Err(Box::new(FormatError::Unterminated {
                src: src(),
                span: (start, 1).into(),
                what: "string literal",
            }));
        }
        State::Template { start } => {
            return Err(Box::new(FormatError::Unterminated {
                src: src(),
                span: (start, 1).into(),
                what: "template literal",
            }));
        }
        State::BlockComment { start } => {
            return Err(Box::new(FormatError::Unterminated {
                src: src(),
                span: (start, 1).into(),
                what: "block comment",
            }));
        }
        State::Code | State::LineComment => {}
    }

    if let Some((delimiter, open_at)) = stack.pop() {
        return Err(Box::new(FormatError::Unclosed {
            src: src(),
            span: (open_at, 1).into(),
            delimiter,
        }));
    }

    Ok(())
}

/// Strip trailing whitespace, collapse blank-line runs to a single blank
/// line, drop leading/trailing blanks, and end with exactly one newline.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_blank = false;

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_component_passes() {
        let text = concat!(
            "import { useState } from \"react\";\n",
            "\n",
            "export function Widget() {\n",
            "  const [counter, setCounter] = useState(0);\n",
            "\n",
            "  return (\n",
            "    <div>\n",
            "      {/* Your component JSX goes here */}\n",
            "    </div>\n",
            "  );\n",
            "}\n",
        );
        assert_eq!(format_source("widget.tsx", text).unwrap(), text);
    }

    #[test]
    fn test_normalization() {
        let text = "const a = 1;  \n\n\n\nconst b = 2;\n\n";
        assert_eq!(
            format_source("x.ts", text).unwrap(),
            "const a = 1;\n\nconst b = 2;\n"
        );
    }

    #[test]
    fn test_missing_trailing_newline_added() {
        assert_eq!(format_source("x.ts", "const a = 1;").unwrap(), "const a = 1;\n");
    }

    #[test]
    fn test_unclosed_brace() {
        let err = format_source("x.ts", "function f() {\n  return 1;\n").unwrap_err();
        assert!(matches!(*err, FormatError::Unclosed { delimiter: '{', .. }));
    }

    #[test]
    fn test_unexpected_closer() {
        let err = format_source("x.ts", "const a = 1;\n}\n").unwrap_err();
        assert!(matches!(*err, FormatError::Unbalanced { found: '}', .. }));
    }

    #[test]
    fn test_mismatched_delimiters() {
        let err = format_source("x.ts", "const a = [1, 2);\n").unwrap_err();
        assert!(matches!(
            *err,
            FormatError::Mismatched {
                opened: '[',
                found: ')',
                ..
            }
        ));
    }

    #[test]
    fn test_delimiters_in_strings_ignored() {
        let text = "const a = \"}{)(\";\n";
        assert!(format_source("x.ts", text).is_ok());
    }

    #[test]
    fn test_delimiters_in_comments_ignored() {
        let text = "// closing } here\n/* and ) here */\nconst a = 1;\n";
        assert!(format_source("x.ts", text).is_ok());
    }

    #[test]
    fn test_unterminated_string() {
        let err = format_source("x.ts", "const a = \"oops;\n").unwrap_err();
        assert!(matches!(
            *err,
            FormatError::Unterminated {
                what: "string literal",
                ..
            }
        ));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = format_source("x.ts", "/* never closed\nconst a = 1;\n").unwrap_err();
        assert!(matches!(
            *err,
            FormatError::Unterminated {
                what: "block comment",
                ..
            }
        ));
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let text = "const a = \"quote \\\" inside\";\n";
        assert!(format_source("x.ts", text).is_ok());
    }
}
