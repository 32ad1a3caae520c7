//! The generation pipeline shared by the scaffold commands.
//!
//! Each generation is a short linear pipeline: the command resolves a fully
//! populated request, the caller verifies the target path is free, the
//! generator composes and plans, and this module formats and writes the
//! plan in order. Writes are not transactional: a failure aborts the
//! remainder of the plan and already-written files stay in place.

use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use log::debug;
use sprig_codegen::fmt::format_source;
use sprig_core::PlannedFile;

use crate::commands::UnwrapOrExit;

/// Abort unless `target_dir/<candidate>` is free.
pub(crate) fn ensure_free(target_dir: &Path, candidate: &str) -> Result<()> {
    if sprig_core::exists(target_dir, candidate) {
        bail!(
            "a file or folder named `{}` already exists at `{}`",
            candidate,
            target_dir.join(candidate).display()
        );
    }
    Ok(())
}

/// Format every planned file, then write them in plan order, or print them
/// for a dry run. Returns the written paths.
///
/// A formatting failure means a composer produced invalid text; it aborts
/// the whole plan before anything touches the disk.
pub(crate) fn execute(plan: Vec<PlannedFile>, dry_run: bool) -> Result<Vec<PathBuf>> {
    let formatted: Vec<PlannedFile> = plan
        .into_iter()
        .map(|file| {
            let content = format_source(file.file_name(), file.content()).unwrap_or_exit();
            file.with_content(content)
        })
        .collect();

    if dry_run {
        for file in &formatted {
            println!("── {} ──", file.path().display());
            println!("{}", file.content());
        }
        println!("── Summary ──");
        println!("{} file(s) would be generated", formatted.len());
        return Ok(Vec::new());
    }

    let mut written = Vec::with_capacity(formatted.len());
    for file in &formatted {
        debug!("writing {}", file.path().display());
        file.write()?;
        written.push(file.path());
    }
    Ok(written)
}

/// Print the success summary for a generation.
pub(crate) fn report(what: &str, name: &str, written: &[PathBuf]) {
    if written.is_empty() {
        // dry run; the preview was already printed
        return;
    }
    println!("Generated {} `{}`", what, name);
    for path in written {
        println!("  + {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_ensure_free_passes_on_vacant_path() {
        let temp = TempDir::new().unwrap();
        assert!(ensure_free(temp.path(), "my-widget").is_ok());
    }

    #[test]
    fn test_ensure_free_rejects_occupied_path() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("my-widget")).unwrap();
        let err = ensure_free(temp.path(), "my-widget").unwrap_err();
        assert!(err.to_string().contains("my-widget"));
    }

    #[test]
    fn test_execute_writes_in_plan_order() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("my-widget");
        let plan = vec![
            PlannedFile::new(&dir, "index.ts", "export * from \"./my-widget\";\n"),
            PlannedFile::new(&dir, "my-widget.tsx", "export function MyWidget() {}\n"),
        ];

        let written = execute(plan, false).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(written[0], dir.join("index.ts"));
        assert_eq!(written[1], dir.join("my-widget.tsx"));
        assert!(dir.join("index.ts").exists());
        assert!(dir.join("my-widget.tsx").exists());
    }

    #[test]
    fn test_execute_normalizes_content() {
        let temp = TempDir::new().unwrap();
        let plan = vec![PlannedFile::new(
            temp.path(),
            "widget.tsx",
            "const a = 1;  \n\n\n\nconst b = 2;",
        )];

        execute(plan, false).unwrap();

        let content = fs::read_to_string(temp.path().join("widget.tsx")).unwrap();
        assert_eq!(content, "const a = 1;\n\nconst b = 2;\n");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let plan = vec![PlannedFile::new(
            temp.path(),
            "widget.tsx",
            "const a = 1;\n",
        )];

        let written = execute(plan, true).unwrap();

        assert!(written.is_empty());
        assert!(!temp.path().join("widget.tsx").exists());
    }
}
