//! The baseline React component composition.

use std::path::Path;

use sprig_codegen::SourceFile;
use sprig_codegen::ast::{Fn, Import, ObjectType, Param};
use sprig_codegen::layout::{Layout, component_file_name};
use sprig_core::{Case, PlannedFile};

/// Feature flags for a React component.
///
/// Flags are independent booleans; every combination composes to valid
/// source, including redundant ones like state without props.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactOptions {
    /// Emit a props type and thread a `props` parameter through.
    pub with_props: bool,
    /// Emit a stateful counter and render it instead of the placeholder.
    pub with_state: bool,
    /// Emit the component as the default export.
    pub export_as_default: bool,
    /// Put the component in its own folder behind an `index.ts` re-export.
    pub with_index_file: bool,
}

/// A requested React component: raw name, naming convention, and flags.
#[derive(Debug, Clone)]
pub struct ReactComponent {
    raw_name: String,
    convention: Case,
    options: ReactOptions,
}

impl ReactComponent {
    pub fn new(raw_name: impl Into<String>, convention: Case, options: ReactOptions) -> Self {
        Self {
            raw_name: raw_name.into(),
            convention,
            options,
        }
    }

    /// The convention-cased name used for files and folders.
    pub fn file_stem(&self) -> String {
        self.convention.apply(&self.raw_name)
    }

    /// The component file name, e.g. `my-widget.tsx`.
    pub fn file_name(&self) -> String {
        component_file_name(&self.file_stem())
    }

    /// The pascal-cased identifier used for the function and props type.
    pub fn type_name(&self) -> String {
        Case::Pascal.apply(&self.raw_name)
    }

    /// The component as a [`SourceFile`], for generators that extend the
    /// baseline composition (e.g. with a leading directive).
    pub fn source_file(&self) -> SourceFile {
        let pascal = self.type_name();

        SourceFile::new()
            .import_if(
                self.options.with_state,
                Import::new("react").named("useState"),
            )
            .section_if(self.options.with_props, &props_type(&pascal))
            .section(&component_fn(&pascal, self.options))
    }

    /// Compose the component source (unformatted).
    pub fn compose(&self) -> String {
        self.source_file().render()
    }

    /// Plan where the component lands: flat, or index-redirect when
    /// requested.
    pub fn plan(&self, target_dir: &Path) -> Vec<PlannedFile> {
        let stem = self.file_stem();
        let file_name = self.file_name();

        Layout {
            target_dir,
            folder_name: &stem,
            file_name: &file_name,
            index_sibling: &stem,
            folder_scoped: false,
            with_index_file: self.options.with_index_file,
        }
        .plan(self.compose())
    }
}

/// The placeholder props type, e.g. `type WidgetProps = { ... };`.
pub(crate) fn props_type(pascal: &str) -> ObjectType {
    ObjectType::new(format!("{}Props", pascal)).placeholder("Define your component props here")
}

/// The component function with its flag-dependent signature and body.
pub(crate) fn component_fn(pascal: &str, options: ReactOptions) -> Fn {
    let mut function = Fn::new(pascal).default_export(options.export_as_default);

    if options.with_props {
        function = function.param(Param::new("props", format!("{}Props", pascal)));
    }
    if options.with_state {
        function = function
            .body_line("const [counter, setCounter] = useState(0);")
            .body_line("");
    }

    let markup = if options.with_state {
        "    {counter}"
    } else {
        "    {/* Your component JSX goes here */}"
    };

    function
        .body_line("return (")
        .body_line("  <div>")
        .body_line(markup)
        .body_line("  </div>")
        .body_line(");")
}
