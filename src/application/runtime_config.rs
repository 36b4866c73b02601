use std::path::PathBuf;

use crate::cli::Cli;

/// Everything a single run needs, detached from argument parsing.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub paths: Vec<String>,
    pub removals: Vec<String>,
    pub config_file: Option<PathBuf>,
    pub scratch_dir: Option<String>,
    pub color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            paths: cli.paths,
            removals: cli.remove,
            config_file: cli.config,
            scratch_dir: cli.scratch_dir,
            color: !cli.no_color,
        }
    }
}
