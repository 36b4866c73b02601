use snafu::prelude::*;
use tracing::{debug, error};

use crate::collation::{Collator, NaturalCollator};
use crate::config::TreeConfig;
use crate::observer::{NullObserver, TreeObserver};
use crate::path::{DirPath, FilePath, PathError};
use crate::tree::arena::Arena;
use crate::tree::node::{Directory, Node, NodeId, NodeKind};

/// A sorted tree mirroring the paths inserted into it.
///
/// Holds up to two disjoint trees: the main tree, whose root always covers
/// every main-tree path and is re-rooted as needed, and the scratch tree for
/// files under the configured scratch directory. Top-level rows list the main
/// root's children first, then the scratch root's.
///
/// Mutation is single-threaded; every structural change is bracketed by the
/// observer's "about to" and "done" notifications.
pub struct PathTree<P, O = NullObserver> {
    pub(super) nodes: Arena<P>,
    pub(super) main_root: Option<NodeId>,
    pub(super) scratch_root: Option<NodeId>,
    scratch_dir: DirPath,
    pub(super) collator: Box<dyn Collator>,
    observer: O,
}

/// What a successful [`PathTree::remove`] took out of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedNode<P> {
    /// Path of the highest node removed, after pruning emptied ancestors.
    pub path: String,
    pub is_directory: bool,
    /// Payloads of every file below the removed node.
    pub payloads: Vec<P>,
}

impl<P> PathTree<P, NullObserver> {
    pub fn new(config: &TreeConfig) -> Self {
        Self::with_observer(config, NullObserver)
    }
}

impl<P, O: TreeObserver> PathTree<P, O> {
    pub fn with_observer(config: &TreeConfig, observer: O) -> Self {
        Self::with_collator(config, NaturalCollator::from(&config.collation), observer)
    }

    /// Builds a tree ordering siblings with `collator` instead of the
    /// configured collation options.
    pub fn with_collator(config: &TreeConfig, collator: impl Collator + 'static, observer: O) -> Self {
        Self {
            nodes: Arena::default(),
            main_root: None,
            scratch_root: None,
            scratch_dir: config.scratch_dir.clone(),
            collator: Box::new(collator),
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn scratch_dir(&self) -> &DirPath {
        &self.scratch_dir
    }

    /// Inserts the file at `path` and returns its handle.
    ///
    /// The tree re-roots itself when the file lies above or beside the
    /// current main root. Files under the scratch directory are placed
    /// directly below the scratch root.
    pub fn insert(
        &mut self,
        path: &str,
        payload: P,
        display_name: Option<&str>,
    ) -> Result<NodeId, TreeError> {
        let target = FilePath::parse(path).context(MalformedPathSnafu)?;
        if self.locate(&target, false).is_some() {
            return AlreadyExistsSnafu {
                path: target.to_string(),
            }
            .fail();
        }
        if let Some(existing) = self.scratch_name_owner(&target).map(str::to_string) {
            return ScratchNameTakenSnafu {
                path: target.to_string(),
                existing,
            }
            .fail();
        }

        let display_name = display_name
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let file = PendingFile {
            target: &target,
            payload,
            display_name,
        };

        if target.dir().starts_with(&self.scratch_dir) {
            let scratch = self.ensure_scratch_root();
            return Ok(self.insert_file(scratch, file));
        }

        let Some(root) = self.main_root else {
            let root = self.alloc_detached_root(target.dir());
            self.main_root = Some(root);
            return Ok(self.insert_file(root, file));
        };

        let root_path = self.dir_path_of(root);
        let file_dir = target.dir();
        let id = if *file_dir == root_path {
            self.insert_file(root, file)
        } else if root_path.is_strictly_below(file_dir) {
            self.promote_root(root, &root_path, file)
        } else if file_dir.is_strictly_below(&root_path) {
            self.extend_below(root, &root_path, file)
        } else {
            self.merge_at_common_ancestor(root, &root_path, file)
        };
        Ok(id)
    }

    /// Looks up a file, or a directory when `expect_directory` is set.
    pub fn find(&self, path: &str, expect_directory: bool) -> Result<NodeId, TreeError> {
        let target = FilePath::parse(path).context(MalformedPathSnafu)?;
        self.locate(&target, expect_directory)
            .context(NotFoundSnafu {
                path: target.to_string(),
            })
    }

    pub fn find_file(&self, path: &str) -> Result<NodeId, TreeError> {
        self.find(path, false)
    }

    pub fn find_directory(&self, path: &str) -> Result<NodeId, TreeError> {
        self.find(path, true)
    }

    /// Removes `id` together with every ancestor directory left empty by the
    /// removal. Removing the last entry of a root discards that whole tree.
    pub fn remove(&mut self, id: NodeId) -> Result<RemovedNode<P>, TreeError> {
        let node = self.nodes.get(id).context(InvalidHandleSnafu { id })?;

        // Climb while the parent would be left empty.
        let mut target = id;
        let mut is_directory = node.kind.is_directory();
        let mut parent = node.parent;
        while let Some(candidate) = parent {
            let Some(parent_node) = self.nodes.get(candidate) else {
                break;
            };
            if parent_node.child_count() != 1 {
                break;
            }
            target = candidate;
            is_directory = true;
            parent = parent_node.parent;
        }

        if target != id {
            debug!("Pruning empty directories up to {}", self.path_of(target));
        }

        let path = self.path_of(target).to_string();
        let payloads = if Some(target) == self.main_root {
            let count = self.main_row_count();
            self.announce_removal(None, 0, count, |tree| {
                tree.main_root = None;
                tree.free_subtree(target)
            })
        } else if Some(target) == self.scratch_root {
            let first = self.main_row_count();
            let count = self.scratch_row_count();
            self.announce_removal(None, first, count, |tree| {
                tree.scratch_root = None;
                tree.free_subtree(target)
            })
        } else {
            let (Some(parent), Some(row)) = (parent, self.row(target)) else {
                error!("Node {} is not linked below a root", target);
                return InvalidHandleSnafu { id }.fail();
            };
            let presented = self.presentation_parent(parent);
            self.announce_removal(presented, row, 1, |tree| {
                tree.unlink_child(parent, target);
                tree.free_subtree(target)
            })
        };

        debug!(
            "Removed {} releasing {} file payload(s)",
            path,
            payloads.len()
        );
        Ok(RemovedNode {
            path,
            is_directory,
            payloads,
        })
    }

    /// Discards both trees and hands back every payload.
    pub fn clear(&mut self) -> Vec<P> {
        if self.main_root.is_none() && self.scratch_root.is_none() {
            return Vec::new();
        }

        let count = self.main_row_count() + self.scratch_row_count();
        debug!("Clearing tree with {} top-level rows", count);
        self.announce_removal(None, 0, count, |tree| {
            let roots = [tree.main_root.take(), tree.scratch_root.take()];
            let payloads: Vec<P> = roots
                .into_iter()
                .flatten()
                .flat_map(|root| tree.free_subtree(root))
                .collect();
            tree.nodes.clear();
            payloads
        })
    }

    /// Places a file above the current root: the file's directory becomes the
    /// new root and the old root hangs below it through a fresh directory chain.
    fn promote_root(&mut self, old_root: NodeId, old_path: &DirPath, file: PendingFile<'_, P>) -> NodeId {
        let new_dir = file.target.dir().clone();
        debug!("Promoting root from {} to {}", old_path, new_dir);

        self.detach_main_root();
        let new_root = self.alloc_detached_root(&new_dir);
        self.hang_below(new_root, &new_dir, old_root, old_path);
        let id = self.attach_file(new_root, file);
        self.install_main_root(new_root);
        id
    }

    /// Places a file beside the current root: their deepest common ancestor
    /// becomes the new root with one branch leading to the old root and one
    /// to the new file.
    fn merge_at_common_ancestor(
        &mut self,
        old_root: NodeId,
        old_path: &DirPath,
        file: PendingFile<'_, P>,
    ) -> NodeId {
        let new_dir = file.target.dir().clone();
        let ancestor = old_path.truncated(old_path.common_prefix_len(&new_dir));
        debug!(
            "Re-rooting at common ancestor {} of {} and {}",
            ancestor, old_path, new_dir
        );

        self.detach_main_root();
        let new_root = self.alloc_detached_root(&ancestor);
        self.hang_below(new_root, &ancestor, old_root, old_path);
        let bottom = self.build_chain(new_root, &ancestor, new_dir.segments_after(&ancestor));
        let id = self.attach_file(bottom, file);
        self.install_main_root(new_root);
        id
    }

    /// Places a file below the current root, reusing existing directories and
    /// attaching any missing ones as a single new branch.
    fn extend_below(&mut self, root: NodeId, root_path: &DirPath, file: PendingFile<'_, P>) -> NodeId {
        let file_dir = file.target.dir().clone();
        let segments = file_dir.segments_after(root_path);

        let mut current = root;
        let mut current_path = root_path.clone();
        let mut existing = 0;
        for segment in segments {
            let child = self
                .directory(current)
                .and_then(|dir| dir.subdirectories.lookup(segment, &self.nodes, &*self.collator));
            match child {
                Some(child) => {
                    current = child;
                    current_path = current_path.join(segment);
                    existing += 1;
                }
                None => break,
            }
        }

        // Every directory already exists.
        let Some((first, deeper)) = segments[existing..].split_first() else {
            return self.insert_file(current, file);
        };

        // The new branch stays invisible until it is linked in one step below.
        let branch_path = current_path.join(first);
        let branch = self
            .nodes
            .alloc(Node::directory(first.as_str(), branch_path.to_string(), Some(current)));
        let bottom = self.build_chain(branch, &branch_path, deeper);
        let id = self.attach_file(bottom, file);

        let pos = self
            .directory(current)
            .map(|dir| dir.subdirectories.insertion_point(first, &self.nodes, &*self.collator))
            .unwrap_or(0);
        let row = self.row_offset(current) + pos;
        let presented = self.presentation_parent(current);
        self.announce_insertion(presented, row, 1, |tree| {
            if let Some(dir) = tree.directory_mut(current) {
                dir.subdirectories.insert_at(pos, branch);
            }
        });
        id
    }

    /// Inserts a file into a directory that is already visible.
    fn insert_file(&mut self, dir: NodeId, file: PendingFile<'_, P>) -> NodeId {
        let name = file.target.file_name();
        let (pos, subdirectories) = self
            .directory(dir)
            .map(|d| {
                (
                    d.files.insertion_point(name, &self.nodes, &*self.collator),
                    d.subdirectories.len(),
                )
            })
            .unwrap_or((0, 0));
        let row = self.row_offset(dir) + subdirectories + pos;
        let presented = self.presentation_parent(dir);

        self.announce_insertion(presented, row, 1, |tree| {
            let id = tree.nodes.alloc(file.into_node(dir));
            if let Some(d) = tree.directory_mut(dir) {
                d.files.insert_at(pos, id);
            }
            id
        })
    }

    /// Adds a file to a directory that is not visible yet.
    fn attach_file(&mut self, dir: NodeId, file: PendingFile<'_, P>) -> NodeId {
        let id = self.nodes.alloc(file.into_node(dir));
        self.link_child(dir, id);
        id
    }

    /// Links `old_root` below `top` through directories named after the
    /// segments between `top_path` and `old_path`.
    fn hang_below(&mut self, top: NodeId, top_path: &DirPath, old_root: NodeId, old_path: &DirPath) {
        // The last segment is the old root itself.
        let intermediate = old_path
            .segments_after(top_path)
            .split_last()
            .map(|(_, rest)| rest)
            .unwrap_or_default();
        let parent = self.build_chain(top, top_path, intermediate);
        self.link_child(parent, old_root);
    }

    /// Creates nested directories below `top` without notifying, returning
    /// the deepest one.
    fn build_chain(&mut self, top: NodeId, top_path: &DirPath, segments: &[String]) -> NodeId {
        let mut current = top;
        let mut current_path = top_path.clone();
        for segment in segments {
            current_path = current_path.join(segment);
            let child = self.nodes.alloc(Node::directory(
                segment.as_str(),
                current_path.to_string(),
                Some(current),
            ));
            self.link_child(current, child);
            current = child;
        }
        current
    }

    /// Inserts `child` into the matching sorted list of `parent` and points
    /// it back at `parent`.
    fn link_child(&mut self, parent: NodeId, child: NodeId) {
        let Some(child_node) = self.nodes.get(child) else {
            error!("Cannot link missing node {} below {}", child, parent);
            return;
        };
        let is_directory = child_node.kind.is_directory();
        let Some(dir) = self.directory(parent) else {
            error!("Cannot link {} below non-directory {}", child, parent);
            return;
        };
        let list = if is_directory {
            &dir.subdirectories
        } else {
            &dir.files
        };
        let pos = list.insertion_point(&child_node.name, &self.nodes, &*self.collator);

        if let Some(dir) = self.directory_mut(parent) {
            let list = if is_directory {
                &mut dir.subdirectories
            } else {
                &mut dir.files
            };
            list.insert_at(pos, child);
        }
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent);
        }
    }

    fn unlink_child(&mut self, parent: NodeId, child: NodeId) {
        let is_directory = self.is_directory(child);
        let pos = self.directory(parent).and_then(|dir| {
            let list = if is_directory {
                &dir.subdirectories
            } else {
                &dir.files
            };
            list.position_of(child, &self.nodes, &*self.collator)
        });

        match (pos, self.directory_mut(parent)) {
            (Some(pos), Some(dir)) => {
                if is_directory {
                    dir.subdirectories.remove_at(pos);
                } else {
                    dir.files.remove_at(pos);
                }
            }
            _ => error!("Node {} is not listed below {}", child, parent),
        }
    }

    /// Frees `id` and everything below it, collecting file payloads.
    fn free_subtree(&mut self, id: NodeId) -> Vec<P> {
        let mut payloads = Vec::new();
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            let Some(node) = self.nodes.free(next) else {
                continue;
            };
            match node.kind {
                NodeKind::Directory(dir) => {
                    pending.extend(dir.subdirectories.iter());
                    pending.extend(dir.files.iter());
                }
                NodeKind::File(file) => payloads.push(file.payload),
            }
        }
        payloads
    }

    fn ensure_scratch_root(&mut self) -> NodeId {
        if let Some(scratch) = self.scratch_root {
            return scratch;
        }
        let scratch_dir = self.scratch_dir.clone();
        debug!("Creating scratch root at {}", scratch_dir);
        let scratch = self.alloc_detached_root(&scratch_dir);
        self.scratch_root = Some(scratch);
        scratch
    }

    fn alloc_detached_root(&mut self, path: &DirPath) -> NodeId {
        self.nodes
            .alloc(Node::directory(path.name(), path.to_string(), None))
    }

    /// Hides every main-root row ahead of re-rooting.
    fn detach_main_root(&mut self) {
        let count = self.main_row_count();
        self.announce_removal(None, 0, count, |tree| {
            tree.main_root = None;
        });
    }

    fn install_main_root(&mut self, root: NodeId) {
        let count = self.child_count(root);
        self.announce_insertion(None, 0, count, |tree| {
            tree.main_root = Some(root);
        });
    }

    fn announce_insertion<R>(
        &mut self,
        parent: Option<NodeId>,
        first: usize,
        count: usize,
        change: impl FnOnce(&mut Self) -> R,
    ) -> R {
        if count == 0 {
            return change(self);
        }
        let last = first + count - 1;
        self.observer.rows_about_to_be_inserted(parent, first, last);
        let result = change(self);
        self.observer.rows_inserted(parent, first, last);
        result
    }

    fn announce_removal<R>(
        &mut self,
        parent: Option<NodeId>,
        first: usize,
        count: usize,
        change: impl FnOnce(&mut Self) -> R,
    ) -> R {
        if count == 0 {
            return change(self);
        }
        let last = first + count - 1;
        self.observer.rows_about_to_be_removed(parent, first, last);
        let result = change(self);
        self.observer.rows_removed(parent, first, last);
        result
    }

    fn locate(&self, target: &FilePath, expect_directory: bool) -> Option<NodeId> {
        let name = target.file_name();
        let lookup = |dir: &Directory| {
            let list = if expect_directory {
                &dir.subdirectories
            } else {
                &dir.files
            };
            list.lookup(name, &self.nodes, &*self.collator)
        };

        if target.dir().starts_with(&self.scratch_dir) {
            // Scratch files are keyed by name only; the stored path must match too.
            let id = lookup(self.directory(self.scratch_root?)?)?;
            return (self.path_of(id) == target.to_string()).then_some(id);
        }

        let root = self.main_root?;
        let root_path = self.dir_path_of(root);
        if !target.dir().starts_with(&root_path) {
            return None;
        }

        let mut current = root;
        for segment in target.dir().segments_after(&root_path) {
            current = self
                .directory(current)?
                .subdirectories
                .lookup(segment, &self.nodes, &*self.collator)?;
        }
        lookup(self.directory(current)?)
    }

    /// Full path of the scratch file already holding the name `target`
    /// would take, when `target` belongs in the scratch tree.
    fn scratch_name_owner(&self, target: &FilePath) -> Option<&str> {
        if !target.dir().starts_with(&self.scratch_dir) {
            return None;
        }
        let id = self
            .directory(self.scratch_root?)?
            .files
            .lookup(target.file_name(), &self.nodes, &*self.collator)?;
        Some(self.path_of(id))
    }

    pub(super) fn directory(&self, id: NodeId) -> Option<&Directory> {
        self.nodes.get(id).and_then(Node::as_directory)
    }

    fn directory_mut(&mut self, id: NodeId) -> Option<&mut Directory> {
        self.nodes.get_mut(id).and_then(Node::as_directory_mut)
    }

    fn path_of(&self, id: NodeId) -> &str {
        self.nodes.get(id).map(|node| node.path.as_str()).unwrap_or("")
    }

    fn dir_path_of(&self, id: NodeId) -> DirPath {
        DirPath::from_normalized(self.path_of(id))
    }
}

/// A file waiting to be placed in the tree.
struct PendingFile<'a, P> {
    target: &'a FilePath,
    payload: P,
    display_name: Option<String>,
}

impl<P> PendingFile<'_, P> {
    fn into_node(self, parent: NodeId) -> Node<P> {
        Node::file(
            self.target.file_name(),
            self.target.to_string(),
            parent,
            self.payload,
            self.display_name,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum TreeError {
    #[snafu(display("Malformed path"))]
    MalformedPath { source: PathError },
    #[snafu(display("Nothing found at '{}'", path))]
    NotFound { path: String },
    #[snafu(display("Handle {} does not refer to a node of this tree", id))]
    InvalidHandle { id: NodeId },
    #[snafu(display("'{}' is already in the tree", path))]
    AlreadyExists { path: String },
    #[snafu(display("Scratch name of '{}' is already taken by '{}'", path, existing))]
    ScratchNameTaken { path: String, existing: String },
}
