use std::path::PathBuf;

use clap::Parser;

/// Validate a form snapshot against a spec set.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "formcheck", version, about)]
pub struct Args {
    /// Log validation decisions at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print failures as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// JSON snapshot of the form element tree.
    pub form: PathBuf,

    /// JSON object mapping selectors to specs.
    pub specs: PathBuf,

    /// JSON settings with the named pattern table.
    pub settings: Option<PathBuf>,
}
