//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;

/// Merge the stable and testing plugin channels into one catalog
#[derive(Parser, Debug)]
#[command(name = "plugin-repo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to plugin-repo.yaml config file
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,

    /// Plugins root directory (overrides the config file)
    #[arg(long)]
    pub root: Option<Utf8PathBuf>,

    /// Build the catalog and print a summary without writing files
    #[arg(long)]
    pub dry_run: bool,
}
