//! SynthesiaCanvas - terminal dashboard for agentic AI workflow design
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use synthesia_canvas::Options;
use synthesia_core::prelude::*;
use synthesia_core::ThemeMode;

/// SynthesiaCanvas - design, inspect and export multi-agent workflows
#[derive(Parser, Debug)]
#[command(name = "synthesia")]
#[command(about = "A terminal dashboard for designing agentic AI workflows", long_about = None)]
struct Args {
    /// Page to open first, e.g. /agents or /workflows/wf-1
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Directory holding config.toml and preferences.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Load the catalog from a JSON file instead of the bundled records
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Switch to this theme mode (light, dark or ocean) and remember it
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    synthesia_canvas::run(Options {
        route: args.route,
        config_dir: args.config_dir,
        data: args.data,
        theme: args.theme,
    })
    .await
}
