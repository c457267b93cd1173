//! The iterator over a HashSet.

use super::hashcore::table::TableIterator;
use super::root::iter;

/// An iterator over the elements of a `HashSet`, in unspecified order.
pub struct Iter<'a, T> {
    entries: TableIterator<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(entries: TableIterator<'a, T>, remaining: usize) -> Self {
        Iter { entries, remaining }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { entries: self.entries.clone(), remaining: self.remaining }
    }
}

impl<'a, T> iter::Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        self.remaining -= 1;
        Some(&entry.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> iter::ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> iter::FusedIterator for Iter<'a, T> {}
