// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "minimal-react", // Command name users type
    author,
    version,
    about = "Scaffolds a minimal React project with webpack and Babel preconfigured.",
    long_about = None
)]
pub struct Cli {
  /// Directory to create the project in (also the package name)
  pub project_directory: Option<String>,

  /// Generate TypeScript sources and a tsconfig.json
  #[arg(long)]
  pub typescript: bool,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}
