use std::io::{self, BufRead};

use pathtree::config::{ConfigError, TreeConfig};
use pathtree::ext::BestEffortPathExt;
use pathtree::{LoggingObserver, PathTree, TreeObserver};
use snafu::Snafu;
use snafu::prelude::*;
use supports_color::Stream;
use tracing::{debug, info, warn};

use crate::application::{RuntimeConfig, render_tree};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let tree_config = load_tree_config(&app_config)?;
        debug!("Loaded config: {:?}", tree_config);

        let paths = if app_config.paths.is_empty() {
            info!("No paths given, reading them from stdin");
            read_stdin_paths().context(StdinSnafu)?
        } else {
            app_config.paths.clone()
        };

        let mut tree = PathTree::with_observer(&tree_config, LoggingObserver);
        insert_paths(&mut tree, &paths);
        remove_paths(&mut tree, &app_config.removals);
        info!("Tree holds {} nodes", tree.node_count());

        let colored = app_config.color && supports_color::on(Stream::Stdout).is_some();
        colored::control::set_override(colored);
        print!("{}", render_tree(&tree, colored));

        Ok(())
    }
}

fn load_tree_config(app_config: &RuntimeConfig) -> Result<TreeConfig, ApplicationError> {
    let tree_config = match &app_config.config_file {
        Some(path) => TreeConfig::from_path(path).context(ConfigLoadSnafu)?,
        None => TreeConfig::default(),
    };
    match &app_config.scratch_dir {
        Some(scratch_dir) => tree_config
            .with_scratch_dir(&scratch_dir.absolute_path_string())
            .context(ScratchDirSnafu),
        None => Ok(tree_config),
    }
}

fn read_stdin_paths() -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
    }
    Ok(paths)
}

/// Inserts every path, keyed by its position in the input. Paths the tree
/// rejects are reported and skipped.
fn insert_paths<O: TreeObserver>(tree: &mut PathTree<usize, O>, paths: &[String]) {
    for (index, raw) in paths.iter().enumerate() {
        if let Err(err) = tree.insert(&raw.absolute_path_string(), index, None) {
            warn!("Skipping {}: {}", raw, err);
        }
    }
}

fn remove_paths<O: TreeObserver>(tree: &mut PathTree<usize, O>, paths: &[String]) {
    for raw in paths {
        let path = raw.absolute_path_string();
        let removed = tree
            .find_file(&path)
            .or_else(|_| tree.find_directory(&path))
            .and_then(|id| tree.remove(id));
        match removed {
            Ok(removed) => debug!(
                "Removed {} ({} file(s))",
                removed.path,
                removed.payloads.len()
            ),
            Err(err) => warn!("Cannot remove {}: {}", raw, err),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the configuration"))]
    ConfigLoadError { source: ConfigError },
    #[snafu(display("Scratch directory override is not usable"))]
    ScratchDirError { source: ConfigError },
    #[snafu(display("Failed to read paths from stdin"))]
    StdinError { source: io::Error },
}
