use std::fmt;

use crate::comparator::{Comparator, DefaultComparator};

use super::{Forest, Iter, NodeId};

/// Ordered set over a single tree of a [`Forest`].
///
/// Keeps the root handle so callers never handle [`NodeId`]s. Every edit goes
/// through the forest's own methods. No balancing is performed; sorted input
/// degenerates into a list.
pub struct TreeSet<T, C = DefaultComparator> {
    forest: Forest<T, C>,
    root: Option<NodeId>,
}

impl<T: Ord> TreeSet<T, DefaultComparator> {
    pub fn new() -> Self {
        Self::with_comparator(DefaultComparator)
    }
}

impl<T: Ord> Default for TreeSet<T, DefaultComparator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> TreeSet<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            forest: Forest::with_comparator(comparator),
            root: None,
        }
    }

    /// Slot of the root. The stored handle is live whenever it is set.
    #[inline]
    fn root_slot(&self) -> Option<u32> {
        self.root.map(|id| id.index)
    }

    pub fn len(&self) -> usize {
        self.forest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Handle of the current root, for use with the underlying forest.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn forest(&self) -> &Forest<T, C> {
        &self.forest
    }

    pub fn first(&self) -> Option<&T> {
        let arena = &self.forest.arena;
        arena.minimum(self.root_slot()).map(|i| arena.value(i))
    }

    pub fn last(&self) -> Option<&T> {
        let arena = &self.forest.arena;
        arena.maximum(self.root_slot()).map(|i| arena.value(i))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.forest.arena, self.root_slot())
    }

    pub fn clear(&mut self) {
        self.forest.clear();
        self.root = None;
    }
}

impl<T, C: Comparator<T>> TreeSet<T, C> {
    /// Returns `false` if an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.root {
            None => {
                self.root = Some(self.forest.new_root(value));
                true
            }
            Some(root) => self.forest.insert(root, value).is_ok_and(|(_, created)| created),
        }
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized,
        C: Comparator<Q, T>,
    {
        self.get(value).is_some()
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        Q: ?Sized,
        C: Comparator<Q, T>,
    {
        let at = self.forest.find(self.root, value).ok()??;
        self.forest.value(at).ok()
    }

    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        Q: ?Sized,
        C: Comparator<Q, T>,
    {
        let at = self.forest.find(self.root, value).ok()??;
        let removal = self.forest.remove(at).ok()?;
        // Only a childless root frees the root slot.
        if self.root.is_some_and(|root| !self.forest.contains_node(root)) {
            self.root = None;
        }
        removal.into_value()
    }
}

impl<T, C: Comparator<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for TreeSet<T, DefaultComparator> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T, C> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
