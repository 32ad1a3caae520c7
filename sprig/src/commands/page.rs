use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use log::debug;
use sprig_codegen_next::{NextPage, PageOptions};
use sprig_core::convert;

use super::{UnwrapOrExit, resolve_case, resolve_dir, resolve_name};
use crate::config::Config;
use crate::convention::Convention;
use crate::prompt::FlagChoice;
use crate::{ops, prompt};

#[derive(Args)]
pub struct PageCommand {
    /// Page name (prompted for when omitted)
    pub name: Option<String>,

    /// Target directory for the generated files
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Naming convention for the route folder name
    #[arg(short, long, value_enum)]
    pub case: Option<Convention>,

    /// Place the page in its own route folder
    #[arg(long)]
    pub in_folder: bool,

    /// Put the page behind an index.ts re-export
    #[arg(long)]
    pub index_file: bool,

    /// Pick options interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Path to sprig.toml (defaults to ./sprig.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PageCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();

        let Some(name) = resolve_name(&self.name, "Next.js page name")? else {
            println!("Aborted.");
            return Ok(());
        };
        let Some(case) = resolve_case(self.case, &config)? else {
            println!("Aborted.");
            return Ok(());
        };
        let Some(options) = self.options()? else {
            println!("Aborted.");
            return Ok(());
        };

        let dir = resolve_dir(self.dir.as_ref(), &config);
        let stem = convert(&name, case)?;
        ops::ensure_free(&dir, &stem)?;

        debug!("next page `{}` with {:?}", stem, options);
        let page = NextPage::new(name, case, options);
        let written = ops::execute(page.plan(&dir), self.dry_run)?;
        ops::report("Next.js page", &stem, &written);

        Ok(())
    }

    fn options(&self) -> Result<Option<PageOptions>> {
        if !self.interactive {
            return Ok(Some(PageOptions {
                in_folder: self.in_folder,
                with_index_file: self.index_file,
            }));
        }

        let choices = [
            FlagChoice::new(
                "in folder",
                "place the page in its own route folder",
                self.in_folder,
            ),
            FlagChoice::new(
                "index file",
                "put the page behind an index.ts re-export",
                self.index_file,
            ),
        ];

        Ok(prompt::preferences(&choices)?.map(|picked| PageOptions {
            in_folder: picked[0],
            with_index_file: picked[1],
        }))
    }
}
