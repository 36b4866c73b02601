use std::cmp::Ordering;

use crate::collation::Collator;
use crate::tree::arena::Arena;
use crate::tree::node::NodeId;

/// Collation order made strict: names the collator considers equal fall back
/// to byte order, so two distinct names never compare `Equal`.
pub(crate) fn sibling_order(collator: &dyn Collator, left: &str, right: &str) -> Ordering {
    collator
        .compare(left, right)
        .then_with(|| left.cmp(right))
}

/// A list of sibling handles kept sorted by node name.
///
/// Names live in the arena, so lookups borrow it. Mutations are split into a
/// read step (`insertion_point`, `position_of`) and a write step (`insert_at`,
/// `remove_at`), letting callers compute positions before touching the arena
/// mutably.
#[derive(Debug, Clone, Default)]
pub(crate) struct ChildList {
    ids: Vec<NodeId>,
}

impl ChildList {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn get(&self, pos: usize) -> Option<NodeId> {
        self.ids.get(pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    fn search<P>(&self, name: &str, arena: &Arena<P>, collator: &dyn Collator) -> Result<usize, usize> {
        self.ids.binary_search_by(|id| {
            let existing = arena.get(*id).map(|node| node.name.as_str()).unwrap_or("");
            sibling_order(collator, existing, name)
        })
    }

    /// Sorted position a node called `name` would occupy.
    pub fn insertion_point<P>(&self, name: &str, arena: &Arena<P>, collator: &dyn Collator) -> usize {
        match self.search(name, arena, collator) {
            Ok(pos) | Err(pos) => pos,
        }
    }

    /// Position of the sibling called exactly `name`.
    pub fn find_by_name<P>(&self, name: &str, arena: &Arena<P>, collator: &dyn Collator) -> Option<usize> {
        self.search(name, arena, collator).ok()
    }

    /// Handle of the sibling called exactly `name`.
    pub fn lookup<P>(&self, name: &str, arena: &Arena<P>, collator: &dyn Collator) -> Option<NodeId> {
        self.find_by_name(name, arena, collator)
            .and_then(|pos| self.get(pos))
    }

    /// Position of `id`, located by binary search on its own name.
    pub fn position_of<P>(&self, id: NodeId, arena: &Arena<P>, collator: &dyn Collator) -> Option<usize> {
        let name = arena.get(id)?.name.as_str();
        self.find_by_name(name, arena, collator)
            .filter(|&pos| self.ids[pos] == id)
    }

    /// Inserts at a position the caller already computed with
    /// [`insertion_point`](Self::insertion_point).
    pub fn insert_at(&mut self, pos: usize, id: NodeId) {
        self.ids.insert(pos, id);
    }

    pub fn remove_at(&mut self, pos: usize) -> NodeId {
        self.ids.remove(pos)
    }
}
