//! Next.js component composition.

use std::path::Path;

use sprig_codegen_react::{ReactComponent, ReactOptions};
use sprig_core::{Case, PlannedFile};

/// Feature flags for a Next.js component.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextOptions {
    pub with_props: bool,
    pub with_state: bool,
    /// Prepend the `"use client";` directive as the file's first line.
    pub client: bool,
    pub export_as_default: bool,
    pub with_index_file: bool,
}

impl NextOptions {
    fn react(self) -> ReactOptions {
        ReactOptions {
            with_props: self.with_props,
            with_state: self.with_state,
            export_as_default: self.export_as_default,
            with_index_file: self.with_index_file,
        }
    }
}

/// A requested Next.js component: the baseline React composition, plus the
/// optional client directive.
#[derive(Debug, Clone)]
pub struct NextComponent {
    component: ReactComponent,
    client: bool,
}

impl NextComponent {
    pub fn new(raw_name: impl Into<String>, convention: Case, options: NextOptions) -> Self {
        Self {
            component: ReactComponent::new(raw_name, convention, options.react()),
            client: options.client,
        }
    }

    /// The convention-cased name used for files and folders.
    pub fn file_stem(&self) -> String {
        self.component.file_stem()
    }

    /// The component file name, e.g. `my-widget.tsx`.
    pub fn file_name(&self) -> String {
        self.component.file_name()
    }

    /// Compose the component source (unformatted).
    pub fn compose(&self) -> String {
        let file = self.component.source_file();
        if self.client {
            file.directive("\"use client\";").render()
        } else {
            file.render()
        }
    }

    /// Plan where the component lands: flat, or index-redirect when
    /// requested.
    pub fn plan(&self, target_dir: &Path) -> Vec<PlannedFile> {
        let mut plan = self.component.plan(target_dir);
        // The layout is the React component's; only the composed content
        // differs by the directive.
        if let Some(last) = plan.pop() {
            plan.push(last.with_content(self.compose()));
        }
        plan
    }
}
