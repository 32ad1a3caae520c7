//! Next.js page composition.

use std::path::Path;

use sprig_codegen::SourceFile;
use sprig_codegen::ast::{Const, Fn, Import, ObjectType, Param};
use sprig_codegen::layout::{Layout, PAGE_FILE};
use sprig_core::{Case, PlannedFile};

/// Layout flags for a Next.js page. The page content itself is fixed:
/// route-parameter props, a metadata export, and a default-exported
/// component.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    /// Place the page in its own route folder (preempts the index layout).
    pub in_folder: bool,
    pub with_index_file: bool,
}

/// A requested Next.js page.
#[derive(Debug, Clone)]
pub struct NextPage {
    raw_name: String,
    convention: Case,
    options: PageOptions,
}

impl NextPage {
    pub fn new(raw_name: impl Into<String>, convention: Case, options: PageOptions) -> Self {
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

    /// The pascal-cased identifier for the page component.
    pub fn type_name(&self) -> String {
        Case::Pascal.apply(&self.raw_name)
    }

    /// The title-cased name used in metadata.
    pub fn title(&self) -> String {
        Case::Title.apply(&self.raw_name)
    }

    /// Compose the page source (unformatted).
    pub fn compose(&self) -> String {
        let pascal = self.type_name();
        let title = self.title();

        let props = ObjectType::new(format!("{}Props", pascal))
            .field("params", "{}")
            .field(
                "searchParams",
                "{ [key: string]: string | string[] | undefined }",
            );

        let metadata = Const::new(
            "metadata",
            format!(
                "{{\n  title: \"{}\",\n  description: \"This is the {} page\",\n}}",
                title, title
            ),
        )
        .ty("Metadata");

        let page = Fn::new(&pascal)
            .default_export(true)
            .param(Param::new("{ params, searchParams }", format!("{}Props", pascal)))
            .body_line("return (")
            .body_line("  <section className=\"\">")
            .body_line(format!("    <h1>{}</h1>", pascal))
            .body_line("  </section>")
            .body_line(");");

        SourceFile::new()
            .import(Import::new("next").named("Metadata").type_only())
            .section(&props)
            .section(&metadata)
            .section(&page)
            .render()
    }

    /// Plan where the page lands. Pages write the fixed `page.tsx` name;
    /// the nested branch preempts index-redirect.
    pub fn plan(&self, target_dir: &Path) -> Vec<PlannedFile> {
        let stem = self.file_stem();

        Layout {
            target_dir,
            folder_name: &stem,
            file_name: PAGE_FILE,
            index_sibling: "page",
            folder_scoped: self.options.in_folder,
            with_index_file: self.options.with_index_file,
        }
        .plan(self.compose())
    }
}

#[cfg(test)]
mod tests {
    use sprig_codegen::fmt::format_source;

    use super::*;

    fn page(options: PageOptions) -> NextPage {
        NextPage::new("user settings", Case::Kebab, options)
    }

    #[test]
    fn test_page_composition() {
        let code = page(PageOptions::default()).compose();
        assert!(code.starts_with("import type { Metadata } from \"next\";\n"));
        assert!(code.contains("type UserSettingsProps = {"));
        assert!(code.contains("  params: {};"));
        assert!(code.contains("  searchParams: { [key: string]: string | string[] | undefined };"));
        assert!(code.contains("export const metadata: Metadata = {"));
        assert!(code.contains("  title: \"User Settings\","));
        assert!(code.contains("  description: \"This is the User Settings page\","));
        assert!(code.contains(
            "export default function UserSettings({ params, searchParams }: UserSettingsProps) {"
        ));
        assert!(code.contains("<h1>UserSettings</h1>"));
    }

    #[test]
    fn test_metadata_uses_title_case() {
        let code = NextPage::new("ABOUT page", Case::Kebab, PageOptions::default()).compose();
        assert!(code.contains("title: \"About Page\","));
    }

    #[test]
    fn test_all_flag_combinations_format() {
        for bits in 0..4u8 {
            let options = PageOptions {
                in_folder: bits & 1 != 0,
                with_index_file: bits & 2 != 0,
            };
            let code = page(options).compose();
            format_source(PAGE_FILE, &code)
                .unwrap_or_else(|e| panic!("flags {:?}: {}", options, e));
        }
    }

    #[test]
    fn test_nested_plan() {
        let plan = page(PageOptions {
            in_folder: true,
            ..Default::default()
        })
        .plan(Path::new("app"));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].path().to_str().unwrap(), "app/user-settings/page.tsx");
    }

    // Branch 1 preempts branch 2: a folder-scoped page ignores the index
    // flag entirely.
    #[test]
    fn test_nested_preempts_index_redirect() {
        let plan = page(PageOptions {
            in_folder: true,
            with_index_file: true,
        })
        .plan(Path::new("app"));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].file_name(), PAGE_FILE);
    }

    #[test]
    fn test_index_redirect_re_exports_page_module() {
        let plan = page(PageOptions {
            in_folder: false,
            with_index_file: true,
        })
        .plan(Path::new("app"));
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].path().to_str().unwrap(), "app/user-settings/index.ts");
        assert_eq!(plan[0].content(), "export * from \"./page\";\n");
        assert_eq!(plan[1].path().to_str().unwrap(), "app/user-settings/page.tsx");
    }

    #[test]
    fn test_flat_plan_uses_fixed_file_name() {
        let plan = page(PageOptions::default()).plan(Path::new("app"));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].path().to_str().unwrap(), "app/page.tsx");
    }
}
