// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - Each namespace maps to one portal concern (department, complaint,
//   notice, personnel)
// - `complaint file` vs `complaint list` reads better than flat
//   `file-complaint` and `list-complaints`
// - Improves --help discoverability as commands grow

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "janseva")]
#[command(about = "Citizen services portal for electricity, gas, and municipal departments", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Override the data directory (default: platform data dir or ~/.janseva)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
