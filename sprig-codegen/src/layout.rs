//! Layout planning: where generated files land on disk.
//!
//! Exactly one of three mutually exclusive directory shapes applies to a
//! request, evaluated in priority order: nested (folder-scoped pages and
//! routes), index-redirect (a folder holding `index.ts` plus the component
//! file), or flat (the component file directly in the target directory).

use std::path::Path;

use sprig_core::PlannedFile;

use crate::ast::{Export, Render};

/// Name of the index re-export file.
pub const INDEX_FILE: &str = "index.ts";
/// Fixed file name for Next.js pages.
pub const PAGE_FILE: &str = "page.tsx";
/// Fixed file name for Remix routes.
pub const ROUTE_FILE: &str = "route.tsx";
/// File extension for component files.
pub const COMPONENT_EXT: &str = "tsx";

/// Component file name for a converted name, e.g. `my-widget.tsx`.
pub fn component_file_name(stem: &str) -> String {
    format!("{}.{}", stem, COMPONENT_EXT)
}

/// The three mutually exclusive directory shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutBranch {
    Nested,
    IndexRedirect,
    Flat,
}

/// Inputs the planner needs to pick a branch and emit planned files.
///
/// The planner never touches the disk and never fails; the caller has
/// already verified the computed paths are free.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub target_dir: &'a Path,
    /// Converted name, used for the nested folder.
    pub folder_name: &'a str,
    /// Final component file name (fixed for pages and routes).
    pub file_name: &'a str,
    /// Module stem the index file re-exports (`page` for pages, the
    /// converted name otherwise).
    pub index_sibling: &'a str,
    /// Page or route placed in its own folder.
    pub folder_scoped: bool,
    pub with_index_file: bool,
}

impl Layout<'_> {
    /// Resolve the directory shape. Nested preempts index-redirect.
    pub fn branch(&self) -> LayoutBranch {
        if self.folder_scoped {
            LayoutBranch::Nested
        } else if self.with_index_file {
            LayoutBranch::IndexRedirect
        } else {
            LayoutBranch::Flat
        }
    }

    /// Emit the planned files in write order.
    ///
    /// The index file is planned before the component file so that folder
    /// creation is verified by the first write.
    pub fn plan(&self, content: String) -> Vec<PlannedFile> {
        match self.branch() {
            LayoutBranch::Nested => vec![PlannedFile::new(
                self.target_dir.join(self.folder_name),
                self.file_name,
                content,
            )],
            LayoutBranch::IndexRedirect => {
                let dir = self.target_dir.join(self.folder_name);
                let index_content = Export::new()
                    .from(format!("./{}", self.index_sibling))
                    .build();
                vec![
                    PlannedFile::new(&dir, INDEX_FILE, index_content),
                    PlannedFile::new(&dir, self.file_name, content),
                ]
            }
            LayoutBranch::Flat => {
                vec![PlannedFile::new(self.target_dir, self.file_name, content)]
            }
        }
    }
}
