//! Abstraction over Sets.
//!
//! The `Set` trait is the minimal capability required of a container by the
//! `WordChecker`: adding elements, testing membership, and counting.
//!
//! It is implemented by this library's `HashSet` and, when the `with-std`
//! feature is enabled, by the standard `HashSet` and `BTreeSet` as well.
//!
//! ```
//! use chainset::hashset::HashSet;
//! use chainset::set::Set;
//!
//! fn fill<S: Set<u32>>(set: &mut S) -> usize {
//!     for e in [1, 2, 3, 2, 1].iter().copied() {
//!         set.add(e);
//!     }
//!     set.size()
//! }
//!
//! assert_eq!(3, fill(&mut HashSet::new(|e: &u32| *e as usize)));
//! assert_eq!(3, fill(&mut std::collections::BTreeSet::new()));
//! ```

#[cfg(feature = "with-std")]
use super::root::collections;
#[cfg(feature = "with-std")]
use super::root::hash;

use super::hashset::HashSet;

/// A mutable, unordered, collection of unique elements.
pub trait Set<T> {
    /// Adds `element`, unless an equal element is already present.
    ///
    /// Returns whether `element` was added.
    fn add(&mut self, element: T) -> bool;

    /// Returns whether an element equal to `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of elements.
    fn size(&self) -> usize;
}

impl<T, F> Set<T> for HashSet<T, F>
where
    T: Eq,
    F: Fn(&T) -> usize,
{
    fn add(&mut self, element: T) -> bool { HashSet::add(self, element) }

    fn contains(&self, element: &T) -> bool { HashSet::contains(self, element) }

    fn size(&self) -> usize { self.len() }
}

#[cfg(feature = "with-std")]
impl<T, S> Set<T> for collections::HashSet<T, S>
where
    T: Eq + hash::Hash,
    S: hash::BuildHasher,
{
    fn add(&mut self, element: T) -> bool { self.insert(element) }

    fn contains(&self, element: &T) -> bool { collections::HashSet::contains(self, element) }

    fn size(&self) -> usize { self.len() }
}

#[cfg(feature = "with-std")]
impl<T: Ord> Set<T> for collections::BTreeSet<T> {
    fn add(&mut self, element: T) -> bool { self.insert(element) }

    fn contains(&self, element: &T) -> bool { collections::BTreeSet::contains(self, element) }

    fn size(&self) -> usize { self.len() }
}

impl<T, S: Set<T> + ?Sized> Set<T> for &mut S {
    fn add(&mut self, element: T) -> bool { (**self).add(element) }

    fn contains(&self, element: &T) -> bool { (**self).contains(element) }

    fn size(&self) -> usize { (**self).size() }
}

//  mod tests
