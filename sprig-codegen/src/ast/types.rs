//! TypeScript object type builder (`type Foo = { ... }`).

use super::Render;
use crate::builder::CodeBuilder;

/// A field in a TypeScript object type.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for TypeScript object type aliases.
///
/// Props types carry no fields when generated; a placeholder comment marks
/// where the user fills them in.
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    fields: Vec<Field>,
    placeholder: Option<String>,
    exported: bool,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            placeholder: None,
            exported: false,
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Comment rendered inside the body when the type has no fields.
    pub fn placeholder(mut self, comment: impl Into<String>) -> Self {
        self.placeholder = Some(comment.into());
        self
    }

    /// Export the type alias.
    pub fn export(mut self) -> Self {
        self.exported = true;
        self
    }
}

impl Render for ObjectType {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let export = if self.exported { "export " } else { "" };

        if self.fields.is_empty() && self.placeholder.is_none() {
            return builder.line(&format!("{}type {} = {{}};", export, self.name));
        }

        builder
            .line(&format!("{}type {} = {{", export, self.name))
            .indent()
            .when(self.fields.is_empty(), |b| match &self.placeholder {
                Some(comment) => b.line(&format!("// {}", comment)),
                None => b,
            })
            .each(&self.fields, |b, field| {
                let optional = if field.optional { "?" } else { "" };
                b.line(&format!("{}{}: {};", field.name, optional, field.ty))
            })
            .dedent()
            .line("};")
    }
}
