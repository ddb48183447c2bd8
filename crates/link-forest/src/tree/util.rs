//! Tree algorithms over raw arena slots.
//!
//! Every function here takes and returns slot indices; handle resolution
//! and logging live in [`Forest`](crate::Forest).

use crate::comparator::Comparator;

use super::arena::Arena;
use super::tree_node::TreeNode;

impl<T> Arena<T> {
    /// Left-most node under `idx`.
    pub(crate) fn minimum_from(&self, mut idx: u32) -> u32 {
        while let Some(l) = self.get_l(idx) {
            idx = l;
        }
        idx
    }

    /// Right-most node under `idx`.
    pub(crate) fn maximum_from(&self, mut idx: u32) -> u32 {
        while let Some(r) = self.get_r(idx) {
            idx = r;
        }
        idx
    }

    pub(crate) fn minimum(&self, node: Option<u32>) -> Option<u32> {
        node.map(|idx| self.minimum_from(idx))
    }

    pub(crate) fn maximum(&self, node: Option<u32>) -> Option<u32> {
        node.map(|idx| self.maximum_from(idx))
    }

    /// In-order successor.
    pub(crate) fn next(&self, node: u32) -> Option<u32> {
        if let Some(r) = self.get_r(node) {
            return Some(self.minimum_from(r));
        }
        let mut curr = node;
        let mut p = self.get_p(node);
        while let Some(pi) = p {
            if self.get_r(pi) == Some(curr) {
                curr = pi;
                p = self.get_p(pi);
            } else {
                return Some(pi);
            }
        }
        None
    }

    /// In-order predecessor.
    pub(crate) fn prev(&self, node: u32) -> Option<u32> {
        if let Some(l) = self.get_l(node) {
            return Some(self.maximum_from(l));
        }
        let mut curr = node;
        let mut p = self.get_p(node);
        while let Some(pi) = p {
            if self.get_l(pi) == Some(curr) {
                curr = pi;
                p = self.get_p(pi);
            } else {
                return Some(pi);
            }
        }
        None
    }

    /// Top of the tree containing `node`.
    pub(crate) fn root_of(&self, mut node: u32) -> u32 {
        while let Some(p) = self.get_p(node) {
            node = p;
        }
        node
    }

    /// Descends from `node`; zero returns the existing slot, an empty child
    /// slot receives a new node.
    pub(crate) fn insert<C>(&mut self, node: u32, value: T, comparator: &C) -> (u32, bool)
    where
        C: Comparator<T> + ?Sized,
    {
        let mut curr = node;
        loop {
            let c = comparator.compare(&value, self.value(curr));
            if c == 0 {
                return (curr, false);
            }
            let child = if c < 0 {
                self.get_l(curr)
            } else {
                self.get_r(curr)
            };
            match child {
                Some(child) => curr = child,
                None => {
                    let idx = self.alloc(Some(curr), value);
                    if c < 0 {
                        self.set_l(curr, Some(idx));
                    } else {
                        self.set_r(curr, Some(idx));
                    }
                    return (idx, true);
                }
            }
        }
    }

    pub(crate) fn find<Q, C>(&self, node: Option<u32>, value: &Q, comparator: &C) -> Option<u32>
    where
        Q: ?Sized,
        C: Comparator<Q, T> + ?Sized,
    {
        let mut curr = node;
        while let Some(i) = curr {
            let c = comparator.compare(value, self.value(i));
            if c == 0 {
                return Some(i);
            }
            curr = if c < 0 { self.get_l(i) } else { self.get_r(i) };
        }
        None
    }

    /// Removes the value stored at `node`.
    ///
    /// While the node has a right subtree its value is swapped with the
    /// minimum of that subtree and removal continues there; otherwise the
    /// same happens with the maximum of the left subtree. The leaf reached
    /// last carries the removed value and is detached from its parent.
    ///
    /// The delta is -1 for a detached left child, 1 for a right child and 0
    /// when the leaf had no parent.
    pub(crate) fn remove(&mut self, node: Option<u32>) -> (Option<TreeNode<T>>, i32) {
        let Some(mut node) = node else {
            return (None, 0);
        };

        loop {
            if let Some(r) = self.get_r(node) {
                let successor = self.minimum_from(r);
                self.swap_values(node, successor);
                node = successor;
            } else if let Some(l) = self.get_l(node) {
                let predecessor = self.maximum_from(l);
                self.swap_values(node, predecessor);
                node = predecessor;
            } else {
                break;
            }
        }

        let delta = match self.get_p(node) {
            Some(p) if self.get_l(p) == Some(node) => {
                self.set_l(p, None);
                -1
            }
            Some(p) => {
                self.set_r(p, None);
                1
            }
            None => 0,
        };
        (self.release(node), delta)
    }

    /// In-order walk. Returns the number of visited nodes.
    pub(crate) fn foreach<F>(&self, node: Option<u32>, proc: &mut F) -> usize
    where
        F: FnMut(&T),
    {
        let Some(idx) = node else {
            return 0;
        };
        let n = self.node(idx);
        let mut res = 1;
        res += self.foreach(n.l, proc);
        proc(&n.v);
        res += self.foreach(n.r, proc);
        res
    }

    /// Number of nodes under `node`.
    pub(crate) fn size(&self, node: Option<u32>) -> usize {
        let mut count = 0;
        let mut stack: Vec<u32> = node.into_iter().collect();
        while let Some(idx) = stack.pop() {
            count += 1;
            let n = self.node(idx);
            stack.extend(n.l);
            stack.extend(n.r);
        }
        count
    }

    /// Unhooks `node` from its parent and frees its whole subtree with an
    /// explicit stack. Returns the number of freed nodes.
    pub(crate) fn destroy(&mut self, node: u32) -> usize {
        if let Some(p) = self.get_p(node) {
            if self.get_l(p) == Some(node) {
                self.set_l(p, None);
            } else {
                self.set_r(p, None);
            }
        }
        let mut freed = 0;
        let mut stack = vec![node];
        while let Some(idx) = stack.pop() {
            let n = self.node(idx);
            stack.extend(n.l);
            stack.extend(n.r);
            if self.release(idx).is_some() {
                freed += 1;
            }
        }
        freed
    }
}
