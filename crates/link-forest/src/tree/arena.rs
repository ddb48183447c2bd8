//! Slot storage behind a [`Forest`](crate::Forest).
//!
//! Each slot holds at most one live [`TreeNode`]. A slot's generation is
//! bumped when its node is freed so that outstanding [`NodeId`]s to it are
//! reported as stale instead of silently naming a reused slot.

use crate::error::ForestError;
use crate::types::Node;

use super::tree_node::TreeNode;
use super::NodeId;

pub(crate) struct Arena<T> {
    slots: Vec<Option<TreeNode<T>>>,
    generations: Vec<u32>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn id(&self, idx: u32) -> NodeId {
        NodeId {
            index: idx,
            generation: self.generations[idx as usize],
        }
    }

    pub(crate) fn is_live(&self, idx: u32) -> bool {
        matches!(self.slots.get(idx as usize), Some(Some(_)))
    }

    pub(crate) fn resolve(&self, id: NodeId) -> Result<u32, ForestError> {
        let i = id.index as usize;
        match self.generations.get(i) {
            None => Err(ForestError::OutOfBounds(id)),
            Some(&generation) if generation != id.generation || self.slots[i].is_none() => {
                Err(ForestError::StaleNode(id))
            }
            Some(_) => Ok(id.index),
        }
    }

    pub(crate) fn resolve_opt(&self, id: Option<NodeId>) -> Result<Option<u32>, ForestError> {
        id.map(|id| self.resolve(id)).transpose()
    }

    /// Non-panicking lookup, used by validation.
    #[inline]
    pub(crate) fn get(&self, idx: u32) -> Option<&TreeNode<T>> {
        self.slots.get(idx as usize).and_then(Option::as_ref)
    }

    /// Live node at `idx`. Links only ever name live slots.
    #[inline]
    pub(crate) fn node(&self, idx: u32) -> &TreeNode<T> {
        match self.slots.get(idx as usize) {
            Some(Some(node)) => node,
            _ => unreachable!("link to free slot {idx}"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut TreeNode<T> {
        match self.slots.get_mut(idx as usize) {
            Some(Some(node)) => node,
            _ => unreachable!("link to free slot {idx}"),
        }
    }

    #[inline]
    pub(crate) fn value(&self, idx: u32) -> &T {
        &self.node(idx).v
    }

    #[inline]
    pub(crate) fn get_p(&self, idx: u32) -> Option<u32> {
        self.node(idx).p()
    }

    #[inline]
    pub(crate) fn get_l(&self, idx: u32) -> Option<u32> {
        self.node(idx).l()
    }

    #[inline]
    pub(crate) fn get_r(&self, idx: u32) -> Option<u32> {
        self.node(idx).r()
    }

    #[inline]
    pub(crate) fn set_p(&mut self, idx: u32, v: Option<u32>) {
        self.node_mut(idx).set_p(v);
    }

    #[inline]
    pub(crate) fn set_l(&mut self, idx: u32, v: Option<u32>) {
        self.node_mut(idx).set_l(v);
    }

    #[inline]
    pub(crate) fn set_r(&mut self, idx: u32, v: Option<u32>) {
        self.node_mut(idx).set_r(v);
    }

    /// Stores a new node whose parent link is `parent`. The caller wires the
    /// parent's child slot.
    pub(crate) fn alloc(&mut self, parent: Option<u32>, value: T) -> u32 {
        let node = TreeNode::new(parent, value);
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(node);
            return idx;
        }
        self.slots.push(Some(node));
        self.generations.push(0);
        (self.slots.len() - 1) as u32
    }

    /// Takes the node out of its slot with all links cleared. The caller has
    /// already unhooked it from its parent and children.
    pub(crate) fn release(&mut self, idx: u32) -> Option<TreeNode<T>> {
        let mut node = self.slots.get_mut(idx as usize)?.take()?;
        node.p = None;
        node.l = None;
        node.r = None;
        let generation = &mut self.generations[idx as usize];
        *generation = generation.wrapping_add(1);
        self.free.push(idx);
        self.len -= 1;
        Some(node)
    }

    /// Exchanges the stored values of two live nodes, leaving links intact.
    pub(crate) fn swap_values(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi as usize);
        if let (Some(x), Some(y)) = (head[lo as usize].as_mut(), tail[0].as_mut()) {
            std::mem::swap(&mut x.v, &mut y.v);
        }
    }

    pub(crate) fn clear(&mut self) {
        for idx in 0..self.slots.len() {
            if self.slots[idx].take().is_some() {
                self.generations[idx] = self.generations[idx].wrapping_add(1);
                self.free.push(idx as u32);
            }
        }
        self.len = 0;
    }
}
