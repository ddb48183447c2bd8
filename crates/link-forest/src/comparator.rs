//! Three-way comparators.
//!
//! A comparator returns a negative number when `candidate` orders before
//! `stored`, zero when they are equal and a positive number otherwise. The
//! same comparator instance must stay consistent for the whole lifetime of
//! the tree that uses it.

use std::cmp::Ordering;

/// Three-way comparison of a candidate against a stored value.
pub trait Comparator<L: ?Sized, R: ?Sized = L> {
    fn compare(&self, candidate: &L, stored: &R) -> i32;
}

impl<L: ?Sized, R: ?Sized, F> Comparator<L, R> for F
where
    F: Fn(&L, &R) -> i32,
{
    #[inline]
    fn compare(&self, candidate: &L, stored: &R) -> i32 {
        self(candidate, stored)
    }
}

#[inline]
fn ordering_to_i32(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Comparator for any [`Ord`] type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultComparator;

impl<T: Ord + ?Sized> Comparator<T> for DefaultComparator {
    #[inline]
    fn compare(&self, candidate: &T, stored: &T) -> i32 {
        ordering_to_i32(candidate.cmp(stored))
    }
}

/// Builds a three-way comparator out of a boolean less-than predicate.
///
/// `less(a, b)` yields -1, `less(b, a)` yields 1, neither yields 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct LessComparator<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for LessComparator<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, candidate: &T, stored: &T) -> i32 {
        if (self.0)(candidate, stored) {
            -1
        } else if (self.0)(stored, candidate) {
            1
        } else {
            0
        }
    }
}

/// Equality predicate first, then less-than.
#[derive(Clone, Copy, Debug, Default)]
pub struct EqLessComparator<E, F> {
    pub equal: E,
    pub less: F,
}

impl<E, F> EqLessComparator<E, F> {
    pub fn new(equal: E, less: F) -> Self {
        Self { equal, less }
    }
}

impl<L: ?Sized, R: ?Sized, E, F> Comparator<L, R> for EqLessComparator<E, F>
where
    E: Fn(&L, &R) -> bool,
    F: Fn(&L, &R) -> bool,
{
    fn compare(&self, candidate: &L, stored: &R) -> i32 {
        if (self.equal)(candidate, stored) {
            0
        } else if (self.less)(candidate, stored) {
            -1
        } else {
            1
        }
    }
}

/// Treats every pair as equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysEq;

/// Orders every candidate before the stored value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysLt;

/// Orders every candidate after the stored value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysGt;

impl<L: ?Sized, R: ?Sized> Comparator<L, R> for AlwaysEq {
    fn compare(&self, _: &L, _: &R) -> i32 {
        0
    }
}

impl<L: ?Sized, R: ?Sized> Comparator<L, R> for AlwaysLt {
    fn compare(&self, _: &L, _: &R) -> i32 {
        -1
    }
}

impl<L: ?Sized, R: ?Sized> Comparator<L, R> for AlwaysGt {
    fn compare(&self, _: &L, _: &R) -> i32 {
        1
    }
}
