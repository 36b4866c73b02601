//! Node accessors and the parent/row view used by list and table
//! presentations.
//!
//! Root directories have no row of their own: the top level (`parent ==
//! None`) lists the main root's children followed by the scratch root's.
//! Within a directory, subdirectories come first, then files.

use tracing::debug;

use crate::observer::TreeObserver;
use crate::tree::node::{Node, NodeId, NodeKind};
use crate::tree::path_tree::{PathTree, TreeError};

impl<P, O: TreeObserver> PathTree<P, O> {
    pub fn main_root(&self) -> Option<NodeId> {
        self.main_root
    }

    pub fn scratch_root(&self) -> Option<NodeId> {
        self.scratch_root
    }

    pub fn is_empty(&self) -> bool {
        self.main_root.is_none() && self.scratch_root.is_none()
    }

    /// Number of live nodes, directories included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|node| node.name.as_str())
    }

    pub fn full_path(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|node| node.path.as_str())
    }

    /// The display-name override of a file, falling back to its name.
    pub fn display_name(&self, id: NodeId) -> Option<&str> {
        let node = self.nodes.get(id)?;
        let override_name = node
            .as_file()
            .and_then(|file| file.display_name.as_deref());
        Some(override_name.unwrap_or(&node.name))
    }

    pub fn is_directory(&self, id: NodeId) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| node.kind.is_directory())
    }

    pub fn is_editable(&self, id: NodeId) -> bool {
        self.nodes
            .get(id)
            .and_then(Node::as_file)
            .is_some_and(|file| file.editable)
    }

    /// Sets the editable flag of a file. Directories are left untouched.
    pub fn set_editable(&mut self, id: NodeId, editable: bool) -> Result<(), TreeError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or(TreeError::InvalidHandle { id })?;
        match &mut node.kind {
            NodeKind::File(file) => file.editable = editable,
            NodeKind::Directory(_) => debug!("Ignoring editable flag on directory {}", node.path),
        }
        Ok(())
    }

    pub fn payload(&self, id: NodeId) -> Option<&P> {
        self.nodes
            .get(id)
            .and_then(Node::as_file)
            .map(|file| &file.payload)
    }

    pub fn payload_mut(&mut self, id: NodeId) -> Option<&mut P> {
        self.nodes
            .get_mut(id)
            .and_then(Node::as_file_mut)
            .map(|file| &mut file.payload)
    }

    /// Direct children of a directory; zero for files and stale handles.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.nodes.get(id).map(Node::child_count).unwrap_or(0)
    }

    /// Children of a directory in row order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.directory(id)
            .into_iter()
            .flat_map(|dir| dir.subdirectories.iter().chain(dir.files.iter()))
    }

    /// True for the scratch root and everything below it.
    pub fn is_scratch(&self, id: NodeId) -> bool {
        let Some(scratch) = self.scratch_root else {
            return false;
        };
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == scratch {
                return true;
            }
            current = self.nodes.get(node_id).and_then(|node| node.parent);
        }
        false
    }

    /// Row of `id` below its presentation parent. Roots have no row.
    pub fn row(&self, id: NodeId) -> Option<usize> {
        let node = self.nodes.get(id)?;
        let parent = node.parent?;
        let dir = self.directory(parent)?;
        let pos = match node.kind {
            NodeKind::Directory(_) => {
                dir.subdirectories
                    .position_of(id, &self.nodes, &*self.collator)?
            }
            NodeKind::File(_) => {
                dir.subdirectories.len()
                    + dir.files.position_of(id, &self.nodes, &*self.collator)?
            }
        };
        Some(self.row_offset(parent) + pos)
    }

    /// Presentation parent of `id`: `None` for top-level rows, roots and
    /// stale handles.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(id)?.parent?;
        self.presentation_parent(parent)
    }

    /// Child at `row` below a presentation parent.
    pub fn index(&self, parent: Option<NodeId>, row: usize) -> Option<NodeId> {
        let (dir_id, local_row) = match parent {
            Some(parent) if self.is_root(parent) => return None,
            Some(parent) => (parent, row),
            None => {
                let main_rows = self.main_row_count();
                if row < main_rows {
                    (self.main_root?, row)
                } else {
                    // Scratch rows follow the main rows.
                    (self.scratch_root?, row - main_rows)
                }
            }
        };

        let dir = self.directory(dir_id)?;
        let subdirectories = dir.subdirectories.len();
        if local_row < subdirectories {
            dir.subdirectories.get(local_row)
        } else {
            dir.files.get(local_row - subdirectories)
        }
    }

    /// Number of rows below a presentation parent.
    pub fn row_count(&self, parent: Option<NodeId>) -> usize {
        match parent {
            None => self.main_row_count() + self.scratch_row_count(),
            Some(parent) if self.is_root(parent) => 0,
            Some(parent) => self.child_count(parent),
        }
    }

    pub(super) fn main_row_count(&self) -> usize {
        self.main_root
            .map(|root| self.child_count(root))
            .unwrap_or(0)
    }

    pub(super) fn scratch_row_count(&self) -> usize {
        self.scratch_root
            .map(|root| self.child_count(root))
            .unwrap_or(0)
    }

    /// First top-level row taken by the children of `dir`.
    pub(super) fn row_offset(&self, dir: NodeId) -> usize {
        if Some(dir) == self.scratch_root {
            self.main_row_count()
        } else {
            0
        }
    }

    /// Roots are invisible, so their children hang off the top level.
    pub(super) fn presentation_parent(&self, dir: NodeId) -> Option<NodeId> {
        if self.is_root(dir) { None } else { Some(dir) }
    }

    fn is_root(&self, id: NodeId) -> bool {
        Some(id) == self.main_root || Some(id) == self.scratch_root
    }
}
