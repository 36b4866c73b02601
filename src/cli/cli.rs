use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Print a set of file paths as a sorted tree.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Files to insert. Read from stdin, one per line, when omitted
    pub paths: Vec<String>,

    /// YAML file with tree settings
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Directory whose files are listed in the scratch section
    #[clap(long, short)]
    pub scratch_dir: Option<String>,

    /// Path to remove once everything is inserted. Tried as a file first,
    /// then as a directory
    #[clap(long, short)]
    pub remove: Vec<String>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,
}
