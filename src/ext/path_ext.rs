use std::env;
use std::path::{Path, PathBuf};

/// Joins relative paths onto the current directory. Absolute paths and paths
/// that cannot be resolved are returned unchanged.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match env::current_dir() {
        Ok(current_dir) => current_dir.join(path),
        Err(_) => path.to_path_buf(),
    }
}

pub fn best_effort_path_display(path: &Path) -> String {
    match path.canonicalize() {
        Ok(canonical_path) => canonical_path.display().to_string(),
        Err(_) => absolutize(path).display().to_string(),
    }
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;

    /// Absolute form of the path as a string, ready for tree insertion.
    fn absolute_path_string(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }

    fn absolute_path_string(&self) -> String {
        absolutize(self).to_string_lossy().into_owned()
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        self.as_path().best_effort_path_display()
    }

    fn absolute_path_string(&self) -> String {
        self.as_path().absolute_path_string()
    }
}

impl BestEffortPathExt for str {
    fn best_effort_path_display(&self) -> String {
        Path::new(self).best_effort_path_display()
    }

    fn absolute_path_string(&self) -> String {
        Path::new(self).absolute_path_string()
    }
}
