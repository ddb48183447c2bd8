use std::fmt;
use std::ops::{Bound, RangeBounds};

use super::cursor::CursorMut;
use super::linked_node::{ForwardLink, Link, LinkedNode};

/// Singly-linked list owning a value-less before-first sentinel.
///
/// Every operation is a rewrite of the sentinel or of some element's `next`
/// link. The length is not cached, so [`len`](Self::len) walks the chain.
pub struct FrontList<T> {
    before_first: Link<T>,
}

impl<T> FrontList<T> {
    pub const fn new() -> Self {
        Self {
            before_first: Link::new(),
        }
    }

    /// List of `n` clones of `value`.
    pub fn n_copies(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new();
        list.push_front_n(n, value);
        list
    }

    /// Copies the values accepted by `filter`, keeping their order.
    pub fn from_filtered<I, F>(values: I, mut filter: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> bool,
    {
        let mut list = Self::new();
        list.before_begin_mut()
            .insert_after_all(values.into_iter().filter(|v| filter(v)));
        list
    }

    pub fn is_empty(&self) -> bool {
        self.before_first.is_empty()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The sentinel link in front of the first element.
    pub fn before_begin(&self) -> &Link<T> {
        &self.before_first
    }

    /// Cursor on the sentinel.
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(&mut self.before_first)
    }

    /// First element node.
    pub fn begin(&self) -> Option<&LinkedNode<T>> {
        self.before_first.next()
    }

    pub fn begin_mut(&mut self) -> Option<&mut LinkedNode<T>> {
        self.before_first.next_mut()
    }

    pub fn front(&self) -> Option<&T> {
        self.begin().map(LinkedNode::value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.begin_mut().map(LinkedNode::value_mut)
    }

    pub fn push_front(&mut self, value: T) -> &mut T {
        self.before_first.new_next(value).value_mut()
    }

    /// Inserts `values` at the front; the first yielded value ends up first.
    pub fn push_front_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.before_begin_mut().insert_after_all(values)
    }

    pub fn push_front_n(&mut self, n: usize, value: T) -> usize
    where
        T: Clone,
    {
        self.before_begin_mut().insert_after_n(n, value)
    }

    /// Unlinks the first element. The returned node no longer owns a tail.
    pub fn pop_front(&mut self) -> Option<Box<LinkedNode<T>>> {
        self.before_first.unlink_next()
    }

    pub fn pop_front_value(&mut self) -> Option<T> {
        self.pop_front().map(|node| node.into_value())
    }

    /// Drops the elements whose positions fall in `range`; returns how many
    /// were dropped. Positions past the end are ignored.
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => Some(e.saturating_add(1)),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => None,
        };
        if end.is_some_and(|e| e <= start) {
            return 0;
        }

        let mut cursor = self.before_begin_mut();
        if cursor.seek(start) < start {
            return 0;
        }
        cursor.erase_after_n(end.map_or(usize::MAX, |e| e - start))
    }

    /// Drops every element matching `pred`; returns how many were dropped.
    pub fn remove_if<P>(&mut self, pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.before_first.remove_next_if(pred)
    }

    /// [`remove_if`](Self::remove_if) forwarding `args` to every call.
    pub fn remove_if_with<A, P>(&mut self, args: &mut A, pred: P) -> usize
    where
        P: FnMut(&T, &mut A) -> bool,
    {
        self.before_first.remove_next_if_with(args, pred)
    }

    /// Drops every element equal to `value`.
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|v| v == value)
    }

    pub fn reverse(&mut self) {
        self.before_first.reverse_after();
    }

    /// Copy of the list in reverse order.
    pub fn reversed(&self) -> Self
    where
        T: Clone,
    {
        let mut out = Self::new();
        for value in self.iter() {
            out.push_front(value.clone());
        }
        out
    }

    /// Overwrites the list with `values`, reusing existing nodes in order.
    /// Extra values get new nodes; surplus nodes are dropped.
    pub fn assign<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut slot = &mut self.before_first;
        for value in values {
            let node = match slot.head {
                Some(ref mut node) => {
                    node.assign(value);
                    &mut **node
                }
                None => slot.new_next(value),
            };
            slot = &mut node.next;
        }
        slot.clear();
    }

    /// Calls `proc` on every value in order; returns the number of calls.
    pub fn foreach<F>(&self, mut proc: F) -> usize
    where
        F: FnMut(&T),
    {
        let mut count = 0;
        for value in self.iter() {
            proc(value);
            count += 1;
        }
        count
    }

    pub fn foreach_with<A, F>(&self, args: &mut A, mut proc: F) -> usize
    where
        F: FnMut(&T, &mut A),
    {
        self.foreach(|v| proc(v, args))
    }

    /// [`foreach`](Self::foreach) from the last value to the first. The chain
    /// only links forward, so the values are buffered before the walk.
    pub fn rforeach<F>(&self, mut proc: F) -> usize
    where
        F: FnMut(&T),
    {
        let values: Vec<&T> = self.iter().collect();
        for &value in values.iter().rev() {
            proc(value);
        }
        values.len()
    }

    pub fn rforeach_with<A, F>(&self, args: &mut A, mut proc: F) -> usize
    where
        F: FnMut(&T, &mut A),
    {
        self.rforeach(|v| proc(v, args))
    }

    pub fn clear(&mut self) {
        self.before_first.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.before_first, &mut other.before_first);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.before_first.next(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.before_first.next_mut(),
        }
    }
}

impl<T> Default for FrontList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for FrontList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.push_front_all(iter);
        list
    }
}

impl<T> Extend<T> for FrontList<T> {
    /// Appends at the tail.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.before_begin_mut();
        while cursor.move_next() {}
        cursor.insert_after_all(iter);
    }
}

impl<T: Clone> Clone for FrontList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for FrontList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for FrontList<T> {}

impl<T: fmt::Debug> fmt::Debug for FrontList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a LinkedNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.head.as_deref();
        Some(&node.value)
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut LinkedNode<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.head.as_deref_mut();
        Some(&mut node.value)
    }
}

pub struct IntoIter<T>(FrontList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front_value()
    }
}

impl<T> IntoIterator for FrontList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a FrontList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FrontList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[i32]) -> FrontList<i32> {
        values.iter().copied().collect()
    }

    fn to_vec(list: &FrontList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_push_front_prepends() {
        let mut l = FrontList::new();
        l.push_front(3);
        l.push_front(2);
        *l.push_front(0) += 1;
        assert_eq!(to_vec(&l), vec![1, 2, 3]);
        assert_eq!(l.front(), Some(&1));
        assert_eq!(l.len(), 3);
    }

    #[test]
    fn test_push_front_all_keeps_order() {
        let mut l = list(&[9]);
        assert_eq!(l.push_front_all([1, 2, 3]), 3);
        assert_eq!(to_vec(&l), vec![1, 2, 3, 9]);
    }

    #[test]
    fn test_remove_if_even() {
        let mut l = list(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(l.remove_if(|v| v % 2 == 0), 3);
        assert_eq!(to_vec(&l), vec![1, 3, 5]);
    }

    #[test]
    fn test_remove_if_with_counts_calls() {
        let mut l = list(&[1, 2, 2, 3]);
        let mut calls = 0;
        let removed = l.remove_if_with(&mut calls, |v, calls| {
            *calls += 1;
            *v == 2
        });
        assert_eq!(removed, 2);
        assert_eq!(calls, 4);
        assert_eq!(l.remove(&1), 1);
        assert_eq!(to_vec(&l), vec![3]);
    }

    #[test]
    fn test_assign_reuses_extends_truncates() {
        let mut l = list(&[1, 2, 3]);
        l.assign([7, 8]);
        assert_eq!(to_vec(&l), vec![7, 8]);
        l.assign([4, 5, 6, 7]);
        assert_eq!(to_vec(&l), vec![4, 5, 6, 7]);
        l.assign(std::iter::empty());
        assert!(l.is_empty());
    }

    #[test]
    fn test_erase_range() {
        let mut l = list(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(l.erase_range(1..3), 2);
        assert_eq!(to_vec(&l), vec![0, 3, 4, 5]);
        assert_eq!(l.erase_range(2..), 2);
        assert_eq!(to_vec(&l), vec![0, 3]);
        assert_eq!(l.erase_range(5..9), 0);
        assert_eq!(l.erase_range(1..1), 0);
        assert_eq!(l.erase_range(..=0), 1);
        assert_eq!(to_vec(&l), vec![3]);
    }

    #[test]
    fn test_reverse_and_reversed() {
        let mut l = list(&[1, 2, 3]);
        let r = l.reversed();
        assert_eq!(to_vec(&r), vec![3, 2, 1]);
        l.reverse();
        assert_eq!(l, r);
    }

    #[test]
    fn test_extend_appends_at_tail() {
        let mut l = list(&[1, 2]);
        l.extend([3, 4]);
        assert_eq!(to_vec(&l), vec![1, 2, 3, 4]);
        let mut empty = FrontList::new();
        empty.extend([5]);
        assert_eq!(to_vec(&empty), vec![5]);
    }

    #[test]
    fn test_iter_mut_and_into_iter() {
        let mut l = list(&[1, 2, 3]);
        for v in &mut l {
            *v *= 10;
        }
        assert_eq!(l.into_iter().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn test_constructors_and_swap() {
        let mut a = FrontList::n_copies(3, 'x');
        let mut b = FrontList::from_filtered(1..=6, |v| v % 3 == 0);
        assert_eq!(format!("{a:?}"), "['x', 'x', 'x']");
        assert_eq!(format!("{b:?}"), "[3, 6]");
        let mut c = FrontList::from_iter(['y']);
        a.swap(&mut c);
        assert_eq!(to_vec_char(&a), vec!['y']);
        assert_eq!(c.len(), 3);
        b.clear();
        assert!(b.is_empty());
    }

    fn to_vec_char(list: &FrontList<char>) -> Vec<char> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut l = list(&[1, 2]);
        let moved = std::mem::take(&mut l);
        assert!(l.is_empty());
        assert_eq!(to_vec(&moved), vec![1, 2]);
    }

    #[test]
    fn test_foreach_counts() {
        let l = list(&[4, 5]);
        let mut sum = 0;
        assert_eq!(l.foreach_with(&mut sum, |v, sum| *sum += v), 2);
        assert_eq!(sum, 9);
        assert_eq!(FrontList::<i32>::new().foreach(|_| {}), 0);
    }

    #[test]
    fn test_rforeach_visits_back_to_front() {
        let mut seen = Vec::new();
        assert_eq!(list(&[1, 2, 3]).rforeach(|v| seen.push(*v)), 3);
        assert_eq!(seen, vec![3, 2, 1]);

        let mut calls = 0;
        assert_eq!(FrontList::<i32>::new().rforeach_with(&mut calls, |_, calls| *calls += 1), 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_rforeach_long_list() {
        let mut l = FrontList::new();
        l.push_front_n(200_000, 7u8);
        l.push_front(1);
        let mut last = None;
        assert_eq!(l.rforeach_with(&mut last, |v, last| *last = Some(*v)), 200_001);
        assert_eq!(last, Some(1));
    }
}
