use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `insights-server` binary.
#[derive(Debug, Parser)]
#[command(
    name = "insights-server",
    version,
    about = "Record and browse brand-tagged insight notes over HTTP"
)]
pub struct Cli {
    /// Extra TOML config file, layered over all other sources
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides config and env)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database file path, or `:memory:` (overrides config and env)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
