use std::path::PathBuf;

use clap::Parser;

/// Create the empty project skeleton for the audio editor UI.
#[derive(Parser, Debug)]
#[command(name = "scaffold", version, about = "Create the audio editor project skeleton")]
pub struct Cli {
    /// Directory the skeleton is created in (defaults to the current directory).
    #[arg(short = 'C', long = "base-dir")]
    pub base_dir: Option<PathBuf>,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
