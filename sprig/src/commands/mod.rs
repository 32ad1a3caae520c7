mod completions;
mod next;
mod page;
mod react;
mod remix;
mod route;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use log::LevelFilter;
use next::NextCommand;
use page::PageCommand;
use react::ReactCommand;
use remix::RemixCommand;
use route::RouteCommand;
use sprig_core::Case;

use crate::config::Config;
use crate::convention::Convention;
use crate::prompt;

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sprig")]
#[command(version)]
#[command(about = "Scaffold React, Next.js, and Remix source files")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Map `-v` counts to the appropriate log level.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::React(cmd) => cmd.run(),
            Commands::Next(cmd) => cmd.run(),
            Commands::Page(cmd) => cmd.run(),
            Commands::Remix(cmd) => cmd.run(),
            Commands::Route(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a React component
    React(ReactCommand),

    /// Generate a Next.js component
    Next(NextCommand),

    /// Generate a Next.js page
    Page(PageCommand),

    /// Generate a Remix component
    Remix(RemixCommand),

    /// Generate a Remix route
    Route(RouteCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Use the given name, or prompt for one. `None` means the user cancelled.
pub(crate) fn resolve_name(given: &Option<String>, prompt_label: &str) -> Result<Option<String>> {
    match given {
        Some(name) => Ok(Some(name.clone())),
        None => prompt::name(prompt_label),
    }
}

/// Pick the naming convention: the `--case` flag wins, then the configured
/// default, then an interactive selection. `None` means the user cancelled.
pub(crate) fn resolve_case(given: Option<Convention>, config: &Config) -> Result<Option<Case>> {
    if let Some(case) = given {
        return Ok(Some(case.into()));
    }
    if let Some(case) = config.defaults.convention {
        return Ok(Some(case));
    }
    prompt::convention()
}

/// Pick the target directory: the `--dir` flag wins, then the configured
/// default, then the current directory.
pub(crate) fn resolve_dir(given: Option<&PathBuf>, config: &Config) -> PathBuf {
    given
        .cloned()
        .or_else(|| config.defaults.dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}
