use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assetgen", version)]
#[command(about = "Generates OpenMoji asset glue and X11 color constants for Flutter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ./assetgen.json when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write download.sh, the pubspec asset lines and the Dart bindings (default)
    #[command(alias = "moji")]
    Emoji {
        /// OpenMoji table to read instead of the configured one
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Directory the generated files are written to
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Print the X11 color constants to stdout
    #[command(alias = "x11")]
    Colors,

    /// Print the effective configuration
    Config,
}
