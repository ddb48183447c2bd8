//! Forward chain primitives.
//!
//! A [`Link`] is an owning forward slot: the `next` field of every
//! [`LinkedNode`], and on its own the value-less "before-first" anchor of a
//! [`FrontList`](crate::FrontList). Dropping a link drops everything after it,
//! so a node spliced out of a chain must have its own tail taken first.

use std::fmt;

/// Owning link to the rest of a chain.
pub struct Link<T> {
    pub(crate) head: Option<Box<LinkedNode<T>>>,
}

/// Chain element owning its value and the remainder of the chain.
pub struct LinkedNode<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Link<T> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    pub fn from_node(node: Box<LinkedNode<T>>) -> Self {
        Self { head: Some(node) }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drops the whole chain after this link.
    pub fn clear(&mut self) {
        drop(self.take_next());
    }

    pub fn into_node(mut self) -> Option<Box<LinkedNode<T>>> {
        self.head.take()
    }
}

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        // Unlink node by node so a long chain does not recurse.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.head.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut curr = self.head.as_deref();
        while let Some(node) = curr {
            list.entry(&node.value);
            curr = node.next.head.as_deref();
        }
        list.finish()
    }
}

impl<T> LinkedNode<T> {
    /// A node with an empty tail.
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: Link::new(),
        }
    }

    pub fn with_next(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the stored value in place, keeping the node and its tail.
    pub fn assign(&mut self, value: T) -> &mut T {
        self.value = value;
        &mut self.value
    }

    /// Consumes the node. Whatever tail it still owns is dropped.
    pub fn into_value(self) -> T {
        self.value
    }

    /// First node, starting with `self`, whose value satisfies `pred`.
    pub fn find_if<P>(&self, mut pred: P) -> Option<&LinkedNode<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut curr = Some(self);
        while let Some(node) = curr {
            if pred(&node.value) {
                return Some(node);
            }
            curr = node.next.head.as_deref();
        }
        None
    }

    /// [`find_if`](Self::find_if) forwarding `args` to every call.
    pub fn find_if_with<A, P>(&self, args: &mut A, mut pred: P) -> Option<&LinkedNode<T>>
    where
        P: FnMut(&T, &mut A) -> bool,
    {
        self.find_if(|v| pred(v, args))
    }

    pub fn find_if_mut<P>(&mut self, mut pred: P) -> Option<&mut LinkedNode<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut curr = Some(self);
        while let Some(node) = curr {
            if pred(&node.value) {
                return Some(node);
            }
            curr = node.next.head.as_deref_mut();
        }
        None
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedNode")
            .field("value", &self.value)
            .field("next", &self.next)
            .finish()
    }
}

/// Operations on "whatever comes after this position".
///
/// Implemented by [`LinkedNode`] (acting on its `next` link) and by
/// [`Link`] itself (acting on the chain it owns), so a sentinel and an
/// element share the same primitives.
pub trait ForwardLink<T> {
    fn link(&self) -> &Link<T>;

    fn link_mut(&mut self) -> &mut Link<T>;

    fn next(&self) -> Option<&LinkedNode<T>> {
        self.link().head.as_deref()
    }

    fn next_mut(&mut self) -> Option<&mut LinkedNode<T>> {
        self.link_mut().head.as_deref_mut()
    }

    fn has_next(&self) -> bool {
        self.link().head.is_some()
    }

    /// Detaches the next node together with its tail. Nothing is dropped;
    /// this link is left empty.
    fn take_next(&mut self) -> Link<T> {
        Link {
            head: self.link_mut().head.take(),
        }
    }

    /// Splices the next node out of the chain and returns it with an empty
    /// tail. Dropping the result destroys exactly that one node.
    fn unlink_next(&mut self) -> Option<Box<LinkedNode<T>>> {
        let link = self.link_mut();
        let mut removed = link.head.take()?;
        *link = removed.take_next();
        Some(removed)
    }

    /// Inserts `value` right after this position and returns the new node.
    fn new_next(&mut self, value: T) -> &mut LinkedNode<T> {
        let link = self.link_mut();
        let next = link.take_next();
        &mut **link.head.insert(Box::new(LinkedNode { value, next }))
    }

    /// Reverses the chain after this position in place.
    fn reverse_after(&mut self) {
        let mut rest = self.link_mut().head.take();
        let mut reversed: Option<Box<LinkedNode<T>>> = None;
        while let Some(mut node) = rest {
            rest = std::mem::replace(&mut node.next.head, reversed);
            reversed = Some(node);
        }
        self.link_mut().head = reversed;
        log::trace!("chain: reversed tail");
    }

    /// Unlinks every following node whose value satisfies `pred`; returns
    /// how many were dropped.
    fn remove_next_if<P>(&mut self, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut slot = self.link_mut();
        loop {
            let hit = match slot.head {
                Some(ref node) => pred(&node.value),
                None => break,
            };
            if hit {
                drop(slot.unlink_next());
                removed += 1;
            } else {
                match slot.head {
                    Some(ref mut node) => slot = &mut node.next,
                    None => break,
                }
            }
        }
        if removed > 0 {
            log::trace!("chain: removed {removed} nodes");
        }
        removed
    }

    /// [`remove_next_if`](Self::remove_next_if) forwarding `args` to every
    /// call.
    fn remove_next_if_with<A, P>(&mut self, args: &mut A, mut pred: P) -> usize
    where
        P: FnMut(&T, &mut A) -> bool,
    {
        self.remove_next_if(|v| pred(v, args))
    }

    /// The link owning the first following node that satisfies `pred`, i.e.
    /// the position right before the match.
    fn find_next_returning_prev<P>(&self, mut pred: P) -> Option<&Link<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut slot = self.link();
        while let Some(node) = slot.head.as_deref() {
            if pred(&node.value) {
                return Some(slot);
            }
            slot = &node.next;
        }
        None
    }

    fn find_next_returning_prev_with<A, P>(&self, args: &mut A, mut pred: P) -> Option<&Link<T>>
    where
        P: FnMut(&T, &mut A) -> bool,
    {
        self.find_next_returning_prev(|v| pred(v, args))
    }

    /// Mutable [`find_next_returning_prev`](Self::find_next_returning_prev):
    /// the match can be dropped with `unlink_next` without a second walk.
    fn find_next_returning_prev_mut<P>(&mut self, mut pred: P) -> Option<&mut Link<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut slot = self.link_mut();
        loop {
            let hit = match slot.head {
                Some(ref node) => pred(&node.value),
                None => return None,
            };
            if hit {
                return Some(slot);
            }
            match slot.head {
                Some(ref mut node) => slot = &mut node.next,
                None => return None,
            }
        }
    }
}

impl<T> ForwardLink<T> for Link<T> {
    #[inline]
    fn link(&self) -> &Link<T> {
        self
    }

    #[inline]
    fn link_mut(&mut self) -> &mut Link<T> {
        self
    }
}

impl<T> ForwardLink<T> for LinkedNode<T> {
    #[inline]
    fn link(&self) -> &Link<T> {
        &self.next
    }

    #[inline]
    fn link_mut(&mut self) -> &mut Link<T> {
        &mut self.next
    }
}
