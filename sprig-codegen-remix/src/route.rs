//! Remix route composition.

use std::path::Path;

use sprig_codegen::SourceFile;
use sprig_codegen::ast::{Const, Fn, Import, Param};
use sprig_codegen::layout::{Layout, ROUTE_FILE};
use sprig_core::{Case, PlannedFile};

use crate::component::{loader_fn, props_type};

/// Feature flags for a Remix route. Routes are always default-exported and
/// always carry a meta export.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteOptions {
    pub with_props: bool,
    pub with_loader: bool,
    /// Place the route in its own folder.
    pub in_folder: bool,
}

/// A requested Remix route.
#[derive(Debug, Clone)]
pub struct RemixRoute {
    raw_name: String,
    convention: Case,
    options: RouteOptions,
}

impl RemixRoute {
    pub fn new(raw_name: impl Into<String>, convention: Case, options: RouteOptions) -> Self {
        Self {
            raw_name: raw_name.into(),
            convention,
            options,
        }
    }

    /// The convention-cased name used for the route folder.
    pub fn file_stem(&self) -> String {
        self.convention.apply(&self.raw_name)
    }

    /// The pascal-cased identifier for the route component.
    pub fn type_name(&self) -> String {
        Case::Pascal.apply(&self.raw_name)
    }

    /// The title-cased name used in the meta export.
    pub fn title(&self) -> String {
        Case::Title.apply(&self.raw_name)
    }

    /// Compose the route source (unformatted).
    pub fn compose(&self) -> String {
        let pascal = self.type_name();
        let title = self.title();

        let file = if self.options.with_loader {
            SourceFile::new()
                .import(
                    Import::new("@remix-run/node")
                        .named("json")
                        .named("LoaderFunctionArgs")
                        .named("MetaFunction"),
                )
                .import(Import::new("@remix-run/react").named("useLoaderData"))
        } else {
            SourceFile::new().import(Import::new("@remix-run/react").named("MetaFunction"))
        };

        file.section_if(self.options.with_props, &props_type(&pascal))
            .section_if(self.options.with_loader, &loader_fn(&pascal))
            .section(&route_component(&pascal, &title, self.options))
            .section(&meta_const(&title))
            .render()
    }

    /// Plan where the route lands. Routes write the fixed `route.tsx` name,
    /// nested in their own folder when requested.
    pub fn plan(&self, target_dir: &Path) -> Vec<PlannedFile> {
        let stem = self.file_stem();

        Layout {
            target_dir,
            folder_name: &stem,
            file_name: ROUTE_FILE,
            index_sibling: &stem,
            folder_scoped: self.options.in_folder,
            with_index_file: false,
        }
        .plan(self.compose())
    }
}

/// The route component: loader payload when available, a title greeting
/// otherwise.
fn route_component(pascal: &str, title: &str, options: RouteOptions) -> Fn {
    let mut function = Fn::new(pascal).default_export(true);
    if options.with_props {
        function = function.param(Param::new("props", format!("{}Props", pascal)));
    }
    if options.with_loader {
        function = function
            .body_line("const data = useLoaderData<typeof loader>();")
            .body_line("");
    }

    let heading = if options.with_loader {
        "    <h1>{data.message}</h1>".to_string()
    } else {
        format!("    <h1>Welcome to {} component</h1>", title)
    };

    function
        .body_line("return (")
        .body_line("  <div>")
        .body_line(heading)
        .body_line("  </div>")
        .body_line(");")
}

/// The trailing `meta` export deriving title and description from the
/// title-cased name.
fn meta_const(title: &str) -> Const {
    Const::new(
        "meta",
        format!(
            concat!(
                "() => {{\n",
                "  return [\n",
                "    {{ title: \"{title}\" }},\n",
                "    {{\n",
                "      name: \"description\",\n",
                "      content: \"This is {title} page\",\n",
                "    }},\n",
                "  ];\n",
                "}}",
            ),
            title = title
        ),
    )
    .ty("MetaFunction")
}

#[cfg(test)]
mod tests {
    use sprig_codegen::fmt::format_source;

    use super::*;

    fn route(options: RouteOptions) -> RemixRoute {
        RemixRoute::new("user profile", Case::Kebab, options)
    }

    #[test]
    fn test_meta_is_always_emitted() {
        for with_loader in [false, true] {
            let code = route(RouteOptions {
                with_loader,
                ..Default::default()
            })
            .compose();
            assert!(code.contains("export const meta: MetaFunction = () => {"));
            assert!(code.contains("    { title: \"User Profile\" },"));
            assert!(code.contains("      content: \"This is User Profile page\","));
        }
    }

    #[test]
    fn test_imports_without_loader() {
        let code = route(RouteOptions::default()).compose();
        assert!(code.starts_with("import { MetaFunction } from \"@remix-run/react\";\n"));
        assert!(!code.contains("@remix-run/node"));
    }

    #[test]
    fn test_imports_with_loader() {
        let code = route(RouteOptions {
            with_loader: true,
            ..Default::default()
        })
        .compose();
        assert!(code.starts_with(
            "import { json, LoaderFunctionArgs, MetaFunction } from \"@remix-run/node\";\n"
        ));
        assert!(code.contains("import { useLoaderData } from \"@remix-run/react\";"));
    }

    #[test]
    fn test_route_is_always_default_exported() {
        let code = route(RouteOptions::default()).compose();
        assert!(code.contains("export default function UserProfile() {"));
    }

    #[test]
    fn test_body_without_loader_greets_by_title() {
        let code = route(RouteOptions::default()).compose();
        assert!(code.contains("<h1>Welcome to User Profile component</h1>"));
        assert!(!code.contains("useLoaderData"));
    }

    #[test]
    fn test_all_flag_combinations_format() {
        for bits in 0..8u8 {
            let options = RouteOptions {
                with_props: bits & 1 != 0,
                with_loader: bits & 2 != 0,
                in_folder: bits & 4 != 0,
            };
            let code = route(options).compose();
            format_source(ROUTE_FILE, &code)
                .unwrap_or_else(|e| panic!("flags {:?}: {}", options, e));
        }
    }

    #[test]
    fn test_nested_plan() {
        let plan = route(RouteOptions {
            in_folder: true,
            ..Default::default()
        })
        .plan(Path::new("app/routes"));
        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan[0].path().to_str().unwrap(),
            "app/routes/user-profile/route.tsx"
        );
    }

    #[test]
    fn test_flat_plan_uses_fixed_file_name() {
        let plan = route(RouteOptions::default()).plan(Path::new("app/routes"));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].path().to_str().unwrap(), "app/routes/route.tsx");
    }
}
