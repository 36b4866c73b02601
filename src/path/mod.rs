//! Normalized, platform-independent path values.
//!
//! Every path handed to the tree is reduced to a list of segments under a
//! single `/` root, so different platform spellings of the same location
//! (`C:\data\a.txt`, `/C:/data/a.txt`) land on the same nodes.

mod dir_path;
mod file_path;

pub use dir_path::DirPath;
pub use file_path::FilePath;

use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum PathError {
    #[snafu(display("Path is empty"))]
    Empty,
    #[snafu(display("Path '{}' is not absolute", path))]
    Relative { path: String },
    #[snafu(display("Path '{}' does not name a file", path))]
    NoFileName { path: String },
}

/// Splits a raw path into normalized segments.
///
/// Backslashes become `/`, `.` segments are dropped and `..` pops the previous
/// segment without ever climbing above the root. A leading drive letter is
/// kept as the first segment.
fn normalize_segments(raw: &str) -> Result<Vec<String>, PathError> {
    // Surrounding whitespace is part of a file name, so it is never trimmed.
    if raw.trim().is_empty() {
        return Err(PathError::Empty);
    }

    let unified = raw.replace('\\', "/");
    if !unified.starts_with('/') && !has_drive_prefix(&unified) {
        return Err(PathError::Relative {
            path: raw.to_string(),
        });
    }

    let mut segments: Vec<String> = Vec::new();
    for part in unified.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(part.to_string()),
        }
    }

    Ok(segments)
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/')
}
