use std::fmt;

use super::{PathError, normalize_segments};

/// An absolute directory path stored as its segments. The filesystem root is
/// the empty segment list and displays as `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DirPath {
    segments: Vec<String>,
}

impl DirPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Result<Self, PathError> {
        normalize_segments(raw).map(Self::from_segments)
    }

    pub fn from_segments<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Rebuilds a path previously produced by `to_string`, skipping
    /// normalization.
    pub(crate) fn from_normalized(path: &str) -> Self {
        Self::from_segments(path.split('/').filter(|segment| !segment.is_empty()))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, or the empty string for the root.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    pub fn join(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Prefix of the first `depth` segments.
    pub fn truncated(&self, depth: usize) -> Self {
        Self::from_segments(self.segments.iter().take(depth).cloned())
    }

    /// True when `self` is `ancestor` or lies somewhere below it.
    pub fn starts_with(&self, ancestor: &DirPath) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }

    /// True when `self` lies strictly below `ancestor`.
    pub fn is_strictly_below(&self, ancestor: &DirPath) -> bool {
        self.depth() > ancestor.depth() && self.starts_with(ancestor)
    }

    /// Number of leading segments shared with `other`.
    pub fn common_prefix_len(&self, other: &DirPath) -> usize {
        self.segments
            .iter()
            .zip(other.segments.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Segments of `self` that follow `prefix`. Empty when `prefix` is not a
    /// prefix of `self`.
    pub fn segments_after(&self, prefix: &DirPath) -> &[String] {
        if self.starts_with(prefix) {
            &self.segments[prefix.depth()..]
        } else {
            &[]
        }
    }
}

impl fmt::Display for DirPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
