use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use log::debug;
use sprig_codegen_react::{ReactComponent, ReactOptions};
use sprig_core::convert;

use super::{UnwrapOrExit, resolve_case, resolve_dir, resolve_name};
use crate::config::Config;
use crate::convention::Convention;
use crate::prompt::FlagChoice;
use crate::{ops, prompt};

#[derive(Args)]
pub struct ReactCommand {
    /// Component name (prompted for when omitted)
    pub name: Option<String>,

    /// Target directory for the generated files
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Naming convention for file and folder names
    #[arg(short, long, value_enum)]
    pub case: Option<Convention>,

    /// Include a typed props object
    #[arg(long)]
    pub props: bool,

    /// Include a stateful counter
    #[arg(long)]
    pub state: bool,

    /// Export the component as the default export
    #[arg(long)]
    pub default_export: bool,

    /// Put the component behind an index.ts re-export
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

impl ReactCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();

        let Some(name) = resolve_name(&self.name, "React component name")? else {
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

        debug!("react component `{}` with {:?}", stem, options);
        let component = ReactComponent::new(name, case, options);
        let written = ops::execute(component.plan(&dir), self.dry_run)?;
        ops::report("React component", &stem, &written);

        Ok(())
    }

    fn options(&self) -> Result<Option<ReactOptions>> {
        if !self.interactive {
            return Ok(Some(ReactOptions {
                with_props: self.props,
                with_state: self.state,
                export_as_default: self.default_export,
                with_index_file: self.index_file,
            }));
        }

        let choices = [
            FlagChoice::new("props", "include a typed props object", true),
            FlagChoice::new("state", "include a stateful counter", self.state),
            FlagChoice::new(
                "default export",
                "export the component as default",
                self.default_export,
            ),
            FlagChoice::new(
                "index file",
                "put the component behind an index.ts re-export",
                self.index_file,
            ),
        ];

        Ok(prompt::preferences(&choices)?.map(|picked| ReactOptions {
            with_props: picked[0],
            with_state: picked[1],
            export_as_default: picked[2],
            with_index_file: picked[3],
        }))
    }
}
