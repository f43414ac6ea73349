// src/main.rs
mod cli;
mod error;
mod generate;
mod install;
mod manifest;
mod materialize;
mod project;
mod templates;

use clap::Parser;
use cli::Cli;
use error::ScaffoldError;
use log::LevelFilter;
use project::ProjectRequest;

fn main() -> Result<(), ScaffoldError> {
  let cli = Cli::parse();

  // Setup logging based on verbosity
  let log_level = match cli.verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  // The project name is checked before anything touches the filesystem.
  let name = cli
    .project_directory
    .ok_or(ScaffoldError::MissingProjectName)?;
  let request = ProjectRequest::new(name, cli.typescript);

  generate::run_generate(&request)
}
