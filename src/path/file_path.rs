use std::fmt;

use super::{DirPath, PathError, normalize_segments};

/// An absolute path split into its parent directory and final name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath {
    dir: DirPath,
    file_name: String,
}

impl FilePath {
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let mut segments = normalize_segments(raw)?;

        // A trailing separator, `.` or `..` names a directory.
        let unified = raw.replace('\\', "/");
        let last = unified.rsplit('/').next().unwrap_or_default();
        if matches!(last, "" | "." | "..") {
            return Err(PathError::NoFileName {
                path: raw.to_string(),
            });
        }

        let file_name = segments.pop().ok_or_else(|| PathError::NoFileName {
            path: raw.to_string(),
        })?;

        Ok(Self {
            dir: DirPath::from_segments(segments),
            file_name,
        })
    }

    pub fn dir(&self) -> &DirPath {
        &self.dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dir.is_root() {
            write!(f, "/{}", self.file_name)
        } else {
            write!(f, "{}/{}", self.dir, self.file_name)
        }
    }
}
