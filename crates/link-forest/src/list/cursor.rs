use super::linked_node::{ForwardLink, Link, LinkedNode};

/// Mutable position inside a [`FrontList`](super::FrontList).
///
/// A cursor sits on a link: initially the list's before-first sentinel, after
/// [`move_next`](Self::move_next) the `next` link of an element. Every edit
/// acts on what follows that position. A cursor that ran off the end stays
/// on the last link, so `insert_after` then appends.
pub struct CursorMut<'a, T> {
    slot: Option<&'a mut Link<T>>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(slot: &'a mut Link<T>) -> Self {
        Self {
            slot: Some(slot),
            index: 0,
        }
    }

    /// Number of elements before the cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cursor is still on the sentinel.
    pub fn is_before_begin(&self) -> bool {
        self.index == 0
    }

    /// Whether nothing follows the cursor.
    pub fn is_at_end(&self) -> bool {
        self.slot.as_deref().map_or(true, |s| s.head.is_none())
    }

    /// The element right after the cursor.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        self.slot.as_deref_mut()?.next_mut().map(LinkedNode::value_mut)
    }

    /// Steps over one element. Returns `false`, without moving, at the end.
    pub fn move_next(&mut self) -> bool {
        let Some(slot) = self.slot.take() else {
            return false;
        };
        if slot.head.is_none() {
            self.slot = Some(slot);
            return false;
        }
        self.slot = slot.head.as_deref_mut().map(|node| &mut node.next);
        self.index += 1;
        true
    }

    /// Steps over up to `n` elements; returns how many were stepped over.
    pub fn seek(&mut self, n: usize) -> usize {
        let mut moved = 0;
        while moved < n && self.move_next() {
            moved += 1;
        }
        moved
    }

    /// Inserts one element after the cursor. The cursor does not move.
    pub fn insert_after(&mut self, value: T) -> &mut T {
        self.slot_mut().new_next(value).value_mut()
    }

    /// Inserts every value after the cursor, keeping their order. Returns
    /// the number inserted.
    pub fn insert_after_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut inserted = 0;
        let mut pos = self.slot_mut();
        for value in values {
            pos = &mut pos.new_next(value).next;
            inserted += 1;
        }
        inserted
    }

    /// Inserts `n` clones of `value` after the cursor.
    pub fn insert_after_n(&mut self, n: usize, value: T) -> usize
    where
        T: Clone,
    {
        self.insert_after_all(std::iter::repeat(value).take(n))
    }

    /// Drops the element after the cursor. Returns `false` if there is none.
    pub fn erase_after(&mut self) -> bool {
        self.remove_after().is_some()
    }

    /// Drops up to `n` elements after the cursor; returns how many.
    pub fn erase_after_n(&mut self, n: usize) -> usize {
        let mut erased = 0;
        while erased < n && self.erase_after() {
            erased += 1;
        }
        erased
    }

    /// Unlinks the element after the cursor. The returned node no longer
    /// owns a tail.
    pub fn remove_after(&mut self) -> Option<Box<LinkedNode<T>>> {
        self.slot.as_deref_mut()?.unlink_next()
    }

    /// Drops everything after the cursor.
    pub fn truncate(&mut self) {
        if let Some(slot) = self.slot.as_deref_mut() {
            slot.clear();
        }
    }

    fn slot_mut(&mut self) -> &mut Link<T> {
        match self.slot {
            Some(ref mut slot) => slot,
            // `slot` is only vacated inside `move_next`
            None => unreachable!("cursor slot vacated"),
        }
    }
}
