//! Intrusive ordered binary search tree.
//!
//! Nodes live in a [`Forest`] arena and reference each other by slot index:
//! `l` / `r` own the children, `p` is a non-owning back-link. The forest may
//! hold several independent trees; every algorithm starts from a caller
//! supplied [`NodeId`], usually the root the caller allocated with
//! [`Forest::new_root`].
//!
//! ```
//! use link_forest::Forest;
//!
//! let mut forest = Forest::<i32>::new();
//! let root = forest.new_root(5);
//! for v in [3, 8, 1, 4, 7, 9] {
//!     forest.insert(root, v).unwrap();
//! }
//!
//! let mut seen = Vec::new();
//! assert_eq!(forest.foreach(Some(root), |v| seen.push(*v)).unwrap(), 7);
//! assert_eq!(seen, vec![1, 3, 4, 5, 7, 8, 9]);
//!
//! let five = forest.find(Some(root), &5).unwrap();
//! let removed = forest.remove(five).unwrap();
//! assert_eq!(removed.into_value(), Some(5));
//! assert_eq!(forest.find(Some(root), &5).unwrap(), None);
//! ```

mod arena;
mod print;
mod rotate;
mod set;
mod tree_node;
mod util;
mod validate;

use std::fmt;

use crate::comparator::{Comparator, DefaultComparator};
use crate::error::{ForestError, InvariantError};

use arena::Arena;

pub use set::TreeSet;
pub use tree_node::TreeNode;

/// Handle to a node of a [`Forest`].
///
/// Carries the slot generation, so a handle kept past its node's removal is
/// rejected with [`ForestError::StaleNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Result of [`Forest::remove`].
#[derive(Debug)]
pub struct Removal<T> {
    /// The detached leaf, carrying the removed value. `None` when nothing was
    /// removed.
    pub node: Option<TreeNode<T>>,
    /// -1 if the detached leaf was a left child, 1 if right, 0 if it had no
    /// parent. Not consumed by anything in this crate.
    pub delta: i32,
}

impl<T> Removal<T> {
    pub fn into_value(self) -> Option<T> {
        self.node.map(TreeNode::into_value)
    }
}

/// Arena of tree nodes sharing one comparator.
pub struct Forest<T, C = DefaultComparator> {
    arena: Arena<T>,
    comparator: C,
}

impl<T: Ord> Forest<T, DefaultComparator> {
    pub fn new() -> Self {
        Self::with_comparator(DefaultComparator)
    }
}

impl<T: Ord> Default for Forest<T, DefaultComparator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Forest<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Number of live nodes across all trees of the forest.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.arena.resolve(node).is_ok()
    }

    /// Allocates a parentless node, the root of a new tree.
    pub fn new_root(&mut self, value: T) -> NodeId {
        let idx = self.arena.alloc(None, value);
        log::trace!("forest: new root {idx}");
        self.arena.id(idx)
    }

    pub fn node(&self, node: NodeId) -> Result<&TreeNode<T>, ForestError> {
        let idx = self.arena.resolve(node)?;
        Ok(self.arena.node(idx))
    }

    pub fn value(&self, node: NodeId) -> Result<&T, ForestError> {
        Ok(self.node(node)?.value())
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, ForestError> {
        let p = self.node(node)?.p;
        Ok(p.map(|i| self.arena.id(i)))
    }

    pub fn left(&self, node: NodeId) -> Result<Option<NodeId>, ForestError> {
        let l = self.node(node)?.l;
        Ok(l.map(|i| self.arena.id(i)))
    }

    pub fn right(&self, node: NodeId) -> Result<Option<NodeId>, ForestError> {
        let r = self.node(node)?.r;
        Ok(r.map(|i| self.arena.id(i)))
    }

    /// Top of the tree that contains `node`.
    pub fn root_of(&self, node: NodeId) -> Result<NodeId, ForestError> {
        let idx = self.arena.resolve(node)?;
        Ok(self.arena.id(self.arena.root_of(idx)))
    }

    /// Inserts `value` below `node` using a comparator supplied by the caller
    /// instead of the forest's own.
    ///
    /// Returns the node holding the value and whether it was created. An equal
    /// value already in the tree is returned with `false` and `value` is
    /// dropped.
    pub fn insert_by<K>(&mut self, node: NodeId, value: T, comparator: &K) -> Result<(NodeId, bool), ForestError>
    where
        K: Comparator<T> + ?Sized,
    {
        let start = self.arena.resolve(node)?;
        let (idx, inserted) = self.arena.insert(start, value, comparator);
        if inserted {
            log::trace!("forest: inserted {idx} under {:?}", self.arena.get_p(idx));
            self.check(idx, comparator);
        }
        Ok((self.arena.id(idx), inserted))
    }

    /// Searches from `node` with a caller supplied comparator.
    pub fn find_by<Q, K>(&self, node: Option<NodeId>, value: &Q, comparator: &K) -> Result<Option<NodeId>, ForestError>
    where
        Q: ?Sized,
        K: Comparator<Q, T> + ?Sized,
    {
        let start = self.arena.resolve_opt(node)?;
        Ok(self.arena.find(start, value, comparator).map(|i| self.arena.id(i)))
    }

    /// Removes the value stored at `node` (see [`Removal`]).
    ///
    /// When `node` has children the handle stays valid afterwards and holds
    /// the value of its former in-order neighbour; only the detached leaf's
    /// slot is freed. `None` is a no-op.
    pub fn remove(&mut self, node: impl Into<Option<NodeId>>) -> Result<Removal<T>, ForestError> {
        let start = self.arena.resolve_opt(node.into())?;
        let anchor = start.and_then(|i| self.arena.get_p(i)).or(start);
        let (node, delta) = self.arena.remove(start);
        if node.is_some() {
            log::trace!("forest: removed leaf below {start:?}, delta {delta}");
        }
        if let Some(anchor) = anchor.filter(|&i| self.arena.is_live(i)) {
            self.check_raw(anchor);
        }
        Ok(Removal { node, delta })
    }

    /// Promotes the right child of `node` and returns it, or `None` when
    /// there is no right child. A rotated root is no longer the root; use
    /// the returned pivot.
    pub fn rotate_left(&mut self, node: NodeId) -> Result<Option<NodeId>, ForestError> {
        let idx = self.arena.resolve(node)?;
        let pivot = self.arena.rotate_left(idx);
        if let Some(pivot) = pivot {
            log::trace!("forest: rotated {idx} left under {pivot}");
            self.check_raw(pivot);
        }
        Ok(pivot.map(|i| self.arena.id(i)))
    }

    /// Mirror of [`rotate_left`](Self::rotate_left).
    pub fn rotate_right(&mut self, node: NodeId) -> Result<Option<NodeId>, ForestError> {
        let idx = self.arena.resolve(node)?;
        let pivot = self.arena.rotate_right(idx);
        if let Some(pivot) = pivot {
            log::trace!("forest: rotated {idx} right under {pivot}");
            self.check_raw(pivot);
        }
        Ok(pivot.map(|i| self.arena.id(i)))
    }

    pub fn minimum(&self, node: Option<NodeId>) -> Result<Option<NodeId>, ForestError> {
        let start = self.arena.resolve_opt(node)?;
        Ok(self.arena.minimum(start).map(|i| self.arena.id(i)))
    }

    pub fn maximum(&self, node: Option<NodeId>) -> Result<Option<NodeId>, ForestError> {
        let start = self.arena.resolve_opt(node)?;
        Ok(self.arena.maximum(start).map(|i| self.arena.id(i)))
    }

    /// In-order successor of `node` within its tree.
    pub fn next(&self, node: NodeId) -> Result<Option<NodeId>, ForestError> {
        let idx = self.arena.resolve(node)?;
        Ok(self.arena.next(idx).map(|i| self.arena.id(i)))
    }

    /// In-order predecessor of `node` within its tree.
    pub fn prev(&self, node: NodeId) -> Result<Option<NodeId>, ForestError> {
        let idx = self.arena.resolve(node)?;
        Ok(self.arena.prev(idx).map(|i| self.arena.id(i)))
    }

    /// In-order traversal of the subtree at `node`; returns how many values
    /// `proc` was called with.
    pub fn foreach<F>(&self, node: Option<NodeId>, mut proc: F) -> Result<usize, ForestError>
    where
        F: FnMut(&T),
    {
        let start = self.arena.resolve_opt(node)?;
        Ok(self.arena.foreach(start, &mut proc))
    }

    /// [`foreach`](Self::foreach) forwarding `args` to every call.
    pub fn foreach_with<A, F>(&self, node: Option<NodeId>, args: &mut A, mut proc: F) -> Result<usize, ForestError>
    where
        F: FnMut(&T, &mut A),
    {
        self.foreach(node, |v| proc(v, args))
    }

    /// In-order iterator over the subtree at `node`.
    pub fn iter(&self, node: Option<NodeId>) -> Result<Iter<'_, T>, ForestError> {
        let start = self.arena.resolve_opt(node)?;
        Ok(Iter::new(&self.arena, start))
    }

    pub fn size(&self, node: Option<NodeId>) -> Result<usize, ForestError> {
        let start = self.arena.resolve_opt(node)?;
        Ok(self.arena.size(start))
    }

    /// Detaches `node` from its parent and frees it together with both
    /// subtrees. Returns the number of freed nodes.
    pub fn destroy(&mut self, node: impl Into<Option<NodeId>>) -> Result<usize, ForestError> {
        let Some(idx) = self.arena.resolve_opt(node.into())? else {
            return Ok(0);
        };
        let parent = self.arena.get_p(idx);
        let freed = self.arena.destroy(idx);
        log::trace!("forest: destroyed subtree {idx}, freed {freed}");
        if let Some(p) = parent {
            self.check_raw(p);
        }
        Ok(freed)
    }

    /// Frees every node of every tree. All outstanding handles become stale.
    pub fn clear(&mut self) {
        self.arena.clear();
    }

    /// Checks back-links, acyclicity and ordering of the tree whose root is
    /// `root`, returning its node count.
    pub fn validate(&self, root: Option<NodeId>) -> Result<usize, InvariantError>
    where
        C: Comparator<T>,
    {
        let start = match root {
            Some(id) => Some(self.arena.resolve(id).map_err(|_| InvariantError::Stale(id.index))?),
            None => None,
        };
        self.arena.validate(start, &self.comparator).inspect_err(|e| {
            log::debug!("forest: invariant violated: {e}");
        })
    }

    /// Like [`validate`](Self::validate) without the ordering check.
    pub fn validate_links(&self, root: Option<NodeId>) -> Result<usize, InvariantError> {
        let start = match root {
            Some(id) => Some(self.arena.resolve(id).map_err(|_| InvariantError::Stale(id.index))?),
            None => None,
        };
        self.arena.validate_links(start)
    }

    /// Dump of the subtree at `root`, one node per line.
    pub fn print(&self, root: Option<NodeId>) -> Result<String, ForestError>
    where
        T: fmt::Display,
    {
        let start = self.arena.resolve_opt(root)?;
        Ok(self.arena.print(start, ""))
    }

    #[cfg(feature = "strict-invariants")]
    fn check<K: Comparator<T> + ?Sized>(&self, idx: u32, comparator: &K) {
        let root = self.arena.root_of(idx);
        let res = self.arena.validate(Some(root), comparator);
        debug_assert!(res.is_ok(), "forest invariant violated: {res:?}");
    }

    #[cfg(not(feature = "strict-invariants"))]
    #[inline]
    fn check<K: Comparator<T> + ?Sized>(&self, _idx: u32, _comparator: &K) {}

    /// Link-shape check after an edit that does not involve a comparator.
    #[cfg(feature = "strict-invariants")]
    fn check_raw(&self, idx: u32) {
        let root = self.arena.root_of(idx);
        let res = self.arena.validate_links(Some(root));
        debug_assert!(res.is_ok(), "forest links broken: {res:?}");
    }

    #[cfg(not(feature = "strict-invariants"))]
    #[inline]
    fn check_raw(&self, _idx: u32) {}
}

impl<T, C: Comparator<T>> Forest<T, C> {
    /// Inserts `value` into the tree below `node` using the forest's
    /// comparator. See [`insert_by`](Self::insert_by).
    pub fn insert(&mut self, node: NodeId, value: T) -> Result<(NodeId, bool), ForestError> {
        let start = self.arena.resolve(node)?;
        let (idx, inserted) = self.arena.insert(start, value, &self.comparator);
        if inserted {
            log::trace!("forest: inserted {idx} under {:?}", self.arena.get_p(idx));
            self.check(idx, &self.comparator);
        }
        Ok((self.arena.id(idx), inserted))
    }

    /// First node under `node` comparing equal to `value`.
    pub fn find<Q>(&self, node: Option<NodeId>, value: &Q) -> Result<Option<NodeId>, ForestError>
    where
        Q: ?Sized,
        C: Comparator<Q, T>,
    {
        self.find_by(node, value, &self.comparator)
    }
}

impl<T, C> fmt::Debug for Forest<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forest")
            .field("len", &self.arena.len())
            .field("slots", &self.arena.slot_count())
            .finish()
    }
}

/// In-order iterator returned by [`Forest::iter`].
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    curr: Option<u32>,
    last: Option<u32>,
}

impl<'a, T> Iter<'a, T> {
    fn new(arena: &'a Arena<T>, root: Option<u32>) -> Self {
        Self {
            arena,
            curr: arena.minimum(root),
            last: arena.maximum(root),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = if Some(idx) == self.last {
            None
        } else {
            self.arena.next(idx)
        };
        Some(self.arena.value(idx))
    }
}
