use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use log::debug;
use sprig_codegen_remix::{RemixRoute, RouteOptions};
use sprig_core::convert;

use super::{UnwrapOrExit, resolve_case, resolve_dir, resolve_name};
use crate::config::Config;
use crate::convention::Convention;
use crate::prompt::FlagChoice;
use crate::{ops, prompt};

#[derive(Args)]
pub struct RouteCommand {
    /// Route name (prompted for when omitted)
    pub name: Option<String>,

    /// Target directory for the generated files
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Naming convention for the route folder name
    #[arg(short, long, value_enum)]
    pub case: Option<Convention>,

    /// Include a typed props object
    #[arg(long)]
    pub props: bool,

    /// Include an async loader and render its payload
    #[arg(long)]
    pub loader: bool,

    /// Place the route in its own folder
    #[arg(long)]
    pub in_folder: bool,

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

impl RouteCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();

        let Some(name) = resolve_name(&self.name, "Remix route name")? else {
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

        debug!("remix route `{}` with {:?}", stem, options);
        let route = RemixRoute::new(name, case, options);
        let written = ops::execute(route.plan(&dir), self.dry_run)?;
        ops::report("Remix route", &stem, &written);

        Ok(())
    }

    fn options(&self) -> Result<Option<RouteOptions>> {
        if !self.interactive {
            return Ok(Some(RouteOptions {
                with_props: self.props,
                with_loader: self.loader,
                in_folder: self.in_folder,
            }));
        }

        let choices = [
            FlagChoice::new("props", "include a typed props object", true),
            FlagChoice::new(
                "loader",
                "include an async loader and render its payload",
                self.loader,
            ),
            FlagChoice::new(
                "in folder",
                "place the route in its own folder",
                self.in_folder,
            ),
        ];

        Ok(prompt::preferences(&choices)?.map(|picked| RouteOptions {
            with_props: picked[0],
            with_loader: picked[1],
            in_folder: picked[2],
        }))
    }
}
