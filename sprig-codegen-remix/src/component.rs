//! Remix component composition.

use std::path::Path;

use sprig_codegen::SourceFile;
use sprig_codegen::ast::{Fn, Import, ObjectType, Param};
use sprig_codegen::layout::{Layout, component_file_name};
use sprig_codegen_react::{ReactComponent, ReactOptions};
use sprig_core::{Case, PlannedFile};

/// Feature flags for a Remix component.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemixOptions {
    pub with_props: bool,
    pub with_state: bool,
    /// Emit an async loader and render its payload instead of the
    /// placeholder. The loader body supersedes the stateful counter.
    pub with_loader: bool,
    pub export_as_default: bool,
    pub with_index_file: bool,
}

impl RemixOptions {
    fn react(self) -> ReactOptions {
        ReactOptions {
            with_props: self.with_props,
            with_state: self.with_state,
            export_as_default: self.export_as_default,
            with_index_file: self.with_index_file,
        }
    }
}

/// A requested Remix component.
#[derive(Debug, Clone)]
pub struct RemixComponent {
    raw_name: String,
    convention: Case,
    options: RemixOptions,
}

impl RemixComponent {
    pub fn new(raw_name: impl Into<String>, convention: Case, options: RemixOptions) -> Self {
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

    /// Compose the component source (unformatted). Without a loader this is
    /// the baseline React composition.
    pub fn compose(&self) -> String {
        if !self.options.with_loader {
            return ReactComponent::new(&self.raw_name, self.convention, self.options.react())
                .compose();
        }

        let pascal = self.type_name();

        SourceFile::new()
            .import(
                Import::new("@remix-run/node")
                    .named("json")
                    .named("LoaderFunctionArgs"),
            )
            .import(Import::new("@remix-run/react").named("useLoaderData"))
            .section_if(self.options.with_props, &props_type(&pascal))
            .section(&loader_fn(&pascal))
            .section(&loader_consumer(&pascal, self.options))
            .render()
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

/// The async loader returning a JSON payload keyed by `message`.
pub(crate) fn loader_fn(pascal: &str) -> Fn {
    Fn::new("loader")
        .async_()
        .param(Param::new("{ request }", "LoaderFunctionArgs"))
        .body_line("return json({")
        .body_line(format!("  message: \"Welcome to {}\",", pascal))
        .body_line("});")
}

/// The component function reading the loader payload.
fn loader_consumer(pascal: &str, options: RemixOptions) -> Fn {
    let mut function = Fn::new(pascal).default_export(options.export_as_default);
    if options.with_props {
        function = function.param(Param::new("props", format!("{}Props", pascal)));
    }

    function
        .body_line("const data = useLoaderData<typeof loader>();")
        .body_line("")
        .body_line("return (")
        .body_line("  <div>")
        .body_line("    <h1>{data.message}</h1>")
        .body_line("  </div>")
        .body_line(");")
}

#[cfg(test)]
mod tests {
    use sprig_codegen::fmt::format_source;

    use super::*;

    fn component(options: RemixOptions) -> RemixComponent {
        RemixComponent::new("contact card", Case::Kebab, options)
    }

    #[test]
    fn test_without_loader_matches_react_baseline() {
        let code = component(RemixOptions {
            with_props: true,
            ..Default::default()
        })
        .compose();
        assert!(code.contains("type ContactCardProps = {"));
        assert!(code.contains("export function ContactCard(props: ContactCardProps) {"));
        assert!(!code.contains("loader"));
    }

    #[test]
    fn test_loader_composition() {
        let code = component(RemixOptions {
            with_loader: true,
            ..Default::default()
        })
        .compose();
        assert!(
            code.starts_with("import { json, LoaderFunctionArgs } from \"@remix-run/node\";\n")
        );
        assert!(code.contains("import { useLoaderData } from \"@remix-run/react\";"));
        assert!(code.contains(
            "export async function loader({ request }: LoaderFunctionArgs) {"
        ));
        assert!(code.contains("  message: \"Welcome to ContactCard\","));
        assert!(code.contains("const data = useLoaderData<typeof loader>();"));
        assert!(code.contains("<h1>{data.message}</h1>"));
        assert!(!code.contains("Your component JSX goes here"));
    }

    #[test]
    fn test_loader_with_default_export() {
        let code = component(RemixOptions {
            with_loader: true,
            export_as_default: true,
            ..Default::default()
        })
        .compose();
        assert!(code.contains("export default function ContactCard() {"));
    }

    #[test]
    fn test_all_flag_combinations_format() {
        for bits in 0..32u8 {
            let options = RemixOptions {
                with_props: bits & 1 != 0,
                with_state: bits & 2 != 0,
                with_loader: bits & 4 != 0,
                export_as_default: bits & 8 != 0,
                with_index_file: bits & 16 != 0,
            };
            let comp = component(options);
            format_source(&comp.file_name(), &comp.compose())
                .unwrap_or_else(|e| panic!("flags {:?}: {}", options, e));
        }
    }

    #[test]
    fn test_index_redirect_plan() {
        let plan = component(RemixOptions {
            with_index_file: true,
            ..Default::default()
        })
        .plan(Path::new("app/components"));
        assert_eq!(plan.len(), 2);
        assert_eq!(
            plan[0].path().to_str().unwrap(),
            "app/components/contact-card/index.ts"
        );
        assert_eq!(
            plan[1].path().to_str().unwrap(),
            "app/components/contact-card/contact-card.tsx"
        );
    }
}
