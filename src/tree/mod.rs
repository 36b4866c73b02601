//! Sorted in-memory mirror of an arbitrary set of file paths.
//!
//! The tree keeps a single main root that is moved up, down or sideways as
//! paths arrive, plus a separate flat subtree for files under the scratch
//! directory. Rows are exposed through a parent/row projection suitable for
//! list and table views.

mod arena;
mod children;
mod node;
mod path_tree;
mod projection;

#[cfg(test)]
mod tests;

pub use node::NodeId;
pub use path_tree::{PathTree, RemovedNode, TreeError};
