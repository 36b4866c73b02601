use derive_more::{Display, IsVariant};

use crate::tree::children::ChildList;

/// Handle to a node of a [`PathTree`](crate::PathTree).
///
/// The generation changes every time an arena slot is reused, so a handle to a
/// removed node never resolves to whatever was allocated in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("#{index}.{generation}")]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<P> {
    pub name: String,
    /// Normalized absolute path of the node.
    pub path: String,
    pub parent: Option<NodeId>,
    pub kind: NodeKind<P>,
}

#[derive(Debug, Clone, IsVariant)]
pub(crate) enum NodeKind<P> {
    Directory(Directory),
    File(FileEntry<P>),
}

/// Children of a directory, kept as two independently sorted lists.
/// Subdirectories always precede files in row order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Directory {
    pub subdirectories: ChildList,
    pub files: ChildList,
}

impl Directory {
    pub fn child_count(&self) -> usize {
        self.subdirectories.len() + self.files.len()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FileEntry<P> {
    pub payload: P,
    pub display_name: Option<String>,
    pub editable: bool,
}

impl<P> Node<P> {
    pub fn directory(name: impl Into<String>, path: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            parent,
            kind: NodeKind::Directory(Directory::default()),
        }
    }

    pub fn file(
        name: impl Into<String>,
        path: impl Into<String>,
        parent: NodeId,
        payload: P,
        display_name: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            parent: Some(parent),
            kind: NodeKind::File(FileEntry {
                payload,
                display_name,
                editable: false,
            }),
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match &self.kind {
            NodeKind::Directory(dir) => Some(dir),
            NodeKind::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match &mut self.kind {
            NodeKind::Directory(dir) => Some(dir),
            NodeKind::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileEntry<P>> {
        match &self.kind {
            NodeKind::File(file) => Some(file),
            NodeKind::Directory(_) => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut FileEntry<P>> {
        match &mut self.kind {
            NodeKind::File(file) => Some(file),
            NodeKind::Directory(_) => None,
        }
    }

    pub fn child_count(&self) -> usize {
        self.as_directory().map(Directory::child_count).unwrap_or(0)
    }
}
