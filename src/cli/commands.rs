//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "proxytag")]
#[command(about = "Detect proxy tags in chat messages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Messages to inspect (read one per line from stdin when omitted)
    #[arg(value_name = "MESSAGE")]
    pub messages: Vec<String>,

    /// Only try this method; repeat to set a priority order
    /// (sigils, half_sigil_start, half_sigil_end)
    #[arg(short, long = "method", value_name = "METHOD")]
    pub methods: Vec<String>,

    /// Config file (default: ./proxytag.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log matcher decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
