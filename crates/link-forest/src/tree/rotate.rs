//! Single rotations.
//!
//! ```text
//!     x                 y
//!    / \      left     / \
//!   a   y    ----->   x   c
//!      / \   <-----  / \
//!     b   c   right a   b
//! ```
//!
//! Both rotations keep the in-order sequence and fix the three affected
//! parent links. The insert and remove algorithms never rotate.

use super::arena::Arena;

impl<T> Arena<T> {
    /// Promotes the right child of `node`. Returns the promoted pivot, or
    /// `None` when `node` has no right child.
    pub(crate) fn rotate_left(&mut self, node: u32) -> Option<u32> {
        let pivot = self.get_r(node)?;
        let inner = self.get_l(pivot);
        let parent = self.get_p(node);

        self.set_r(node, inner);
        if let Some(inner) = inner {
            self.set_p(inner, Some(node));
        }
        self.set_l(pivot, Some(node));
        self.set_p(node, Some(pivot));
        self.set_p(pivot, parent);
        self.replace_child(parent, node, pivot);
        Some(pivot)
    }

    /// Promotes the left child of `node`. Returns the promoted pivot, or
    /// `None` when `node` has no left child.
    pub(crate) fn rotate_right(&mut self, node: u32) -> Option<u32> {
        let pivot = self.get_l(node)?;
        let inner = self.get_r(pivot);
        let parent = self.get_p(node);

        self.set_l(node, inner);
        if let Some(inner) = inner {
            self.set_p(inner, Some(node));
        }
        self.set_r(pivot, Some(node));
        self.set_p(node, Some(pivot));
        self.set_p(pivot, parent);
        self.replace_child(parent, node, pivot);
        Some(pivot)
    }

    /// Points whichever child slot of `parent` held `old` at `new`.
    fn replace_child(&mut self, parent: Option<u32>, old: u32, new: u32) {
        if let Some(p) = parent {
            if self.get_l(p) == Some(old) {
                self.set_l(p, Some(new));
            } else {
                self.set_r(p, Some(new));
            }
        }
    }
}
