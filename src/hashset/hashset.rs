//! The HashSet

use log::debug;

use super::root::{fmt, iter};

use super::failure::{panic_from_failure, Result};
use super::hashcore::capacity::{BucketIndex, Capacity, Size, DEFAULT_CAPACITY};
use super::hashcore::table::Table;
use super::iterator::Iter;

//
//  Public Interface
//

/// `HashSet`
///
/// The hash function `F` is any callable mapping a reference to an element to
/// an unsigned integer. It is invoked once per insertion or look-up, never
/// during growth, and must be deterministic: equal elements must hash equally.
pub struct HashSet<T, F> {
    //  Hash function of the HashSet.
    hash: F,
    //  The number of elements in the set; never greater than the capacity of
    //  the table.
    size: Size,
    table: Table<T>,
}

impl<T, F> HashSet<T, F>
where
    F: Fn(&T) -> usize,
{
    /// Creates a new instance of the `HashSet` with a capacity of 10 buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let set = HashSet::new(|e: &i32| *e as usize);
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(10, set.capacity());
    /// ```
    pub fn new(hash: F) -> Self { Self::with_capacity(DEFAULT_CAPACITY, hash) }

    /// Creates a new instance of the `HashSet` with a capacity of `capacity`
    /// buckets.
    ///
    /// If `capacity` is 0, it is rounded up to 1.
    ///
    /// #   Panics
    ///
    /// Panics if the buckets cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let set = HashSet::with_capacity(0, |e: &i32| *e as usize);
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(1, set.capacity());
    /// ```
    pub fn with_capacity(capacity: usize, hash: F) -> Self {
        Self::try_with_capacity(capacity, hash)
            .unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new instance of the `HashSet` with a capacity of `capacity`
    /// buckets.
    ///
    /// If `capacity` is 0, it is rounded up to 1.
    ///
    /// #   Errors
    ///
    /// Returns an error if the buckets cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::failure::Failure;
    /// #   use chainset::hashset::HashSet;
    /// let set = HashSet::try_with_capacity(usize::MAX / 2, |e: &i32| *e as usize);
    ///
    /// assert_eq!(Some(Failure::OutOfMemory), set.err());
    /// ```
    pub fn try_with_capacity(capacity: usize, hash: F) -> Result<Self> {
        let table = Table::try_new(Capacity::new(capacity))?;

        Ok(HashSet { hash, size: Size(0), table })
    }
}

impl<T, F> HashSet<T, F> {
    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::new(|e: &i32| *e as usize);
    /// assert!(set.is_empty());
    ///
    /// set.add(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.size.0 == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::new(|e: &i32| *e as usize);
    /// assert_eq!(0, set.len());
    ///
    /// set.add(1);
    /// set.add(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.size.0 }

    /// Returns the current number of buckets of the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::with_capacity(2, |e: &i32| *e as usize);
    /// assert_eq!(2, set.capacity());
    ///
    /// set.extend([1, 2].iter().copied());
    /// assert_eq!(4, set.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.table.capacity().buckets() }

    /// Returns the number of elements in the bucket at `index`.
    ///
    /// Returns 0 if `index` is out of bounds.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::new(|_: &i32| 3);
    /// set.extend([1, 2, 3].iter().copied());
    ///
    /// assert_eq!(3, set.elements_at_index(3));
    /// assert_eq!(0, set.elements_at_index(4));
    /// assert_eq!(0, set.elements_at_index(usize::MAX));
    /// ```
    pub fn elements_at_index(&self, index: usize) -> usize {
        self.table.chain(BucketIndex(index)).map_or(0, |chain| chain.len())
    }

    /// Returns an iterator over the elements, in unspecified order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::new(|e: &i32| *e as usize);
    /// set.extend([3, 1, 2].iter().copied());
    ///
    /// let mut elements: Vec<_> = set.iter().copied().collect();
    /// elements.sort();
    ///
    /// assert_eq!(vec![1, 2, 3], elements);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> { Iter::new(self.table.iter(), self.size.0) }
}

impl<T, F> HashSet<T, F>
where
    T: Eq,
    F: Fn(&T) -> usize,
{
    /// Returns `true` if the set contains the element.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::new(|e: &i32| *e as usize);
    /// set.add(1);
    ///
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&0));
    /// ```
    pub fn contains(&self, element: &T) -> bool { self.get(element).is_some() }

    /// Returns a reference to the element stored in the set, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::new(|e: &String| e.len());
    /// set.add("Hello".to_string());
    ///
    /// assert_eq!(Some(&"Hello".to_string()), set.get(&"Hello".to_string()));
    /// assert_eq!(None, set.get(&"World".to_string()));
    /// ```
    pub fn get(&self, element: &T) -> Option<&T> {
        let hash = (self.hash)(element);

        self.table.get(hash, element)
    }

    /// Returns `true` if the element is in the bucket at `index`.
    ///
    /// Returns `false` if `index` is out of bounds.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::new(|e: &i32| *e as usize);
    /// set.add(12);
    ///
    /// assert!(set.is_element_at_index(&12, 2));
    /// assert!(!set.is_element_at_index(&12, 12));
    /// assert!(!set.is_element_at_index(&2, 2));
    /// ```
    pub fn is_element_at_index(&self, element: &T, index: usize) -> bool {
        let index = BucketIndex(index);

        match self.table.chain(index).and_then(|chain| chain.find(element)) {
            Some(entry) => {
                debug_assert_eq!(index, entry.bucket);
                true
            },
            None => false,
        }
    }

    /// Adds an element to the set.
    ///
    /// Returns `true` if the element was added, `false` if an equal element
    /// was already present, in which case `element` is dropped.
    ///
    /// If, once added, the load factor exceeds 0.8, the number of buckets is
    /// doubled.
    ///
    /// #   Errors
    ///
    /// Returns an error if the number of buckets needs doubling, and either
    /// cannot be doubled or the doubled buckets cannot be allocated. The set
    /// is then left unmodified.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::new(|e: &i32| *e as usize);
    ///
    /// assert_eq!(Ok(true), set.try_add(3));
    /// assert_eq!(Ok(false), set.try_add(3));
    ///
    /// assert!(set.contains(&3));
    /// ```
    pub fn try_add(&mut self, element: T) -> Result<bool> {
        let hash = (self.hash)(&element);

        if self.table.get(hash, &element).is_some() {
            return Ok(false);
        }

        let size = Size(self.size.0 + 1);
        let capacity = self.table.capacity();

        if capacity.is_overloaded(size) {
            //  Allocate first, so that failure leaves the set untouched.
            let mut grown = Table::try_new(capacity.try_double()?)?;

            self.table.link(hash, element);
            self.table.relink_into(&mut grown);
            self.table = grown;

            debug!("HashSet grown from {} to {} buckets, for {} elements",
                capacity.buckets(), self.table.capacity().buckets(), size.0);
        } else {
            self.table.link(hash, element);
        }

        self.size = size;

        Ok(true)
    }

    /// Adds an element to the set.
    ///
    /// Calling this method is equivalent to calling `try_add` and panicking on
    /// error.
    ///
    /// #   Panics
    ///
    /// Panics if the element cannot be added.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::hashset::HashSet;
    /// let mut set = HashSet::new(|e: &i32| *e as usize);
    ///
    /// assert!(set.add(3));
    /// assert!(!set.add(3));
    ///
    /// assert!(set.contains(&3));
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        self.try_add(element).unwrap_or_else(|failure| panic_from_failure(failure))
    }
}

/// A `HashSet<T, F>` clones into an independent `HashSet`: each element is
/// cloned into a fresh entry, in a fresh bucket array.
///
/// #   Example
///
/// ```
/// #   use chainset::hashset::HashSet;
/// let mut original = HashSet::new(|e: &i32| *e as usize);
/// original.add(1);
///
/// let mut copy = original.clone();
/// copy.add(2);
///
/// assert_eq!(1, original.len());
/// assert!(!original.contains(&2));
/// assert_eq!(2, copy.len());
/// ```
impl<T: Clone, F: Clone> Clone for HashSet<T, F> {
    fn clone(&self) -> Self {
        HashSet { hash: self.hash.clone(), size: self.size, table: self.table.clone() }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for HashSet<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.table.debug("HashSet", self.size, f)
    }
}

impl<T, F> iter::Extend<T> for HashSet<T, F>
where
    T: Eq,
    F: Fn(&T) -> usize,
{
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>
    {
        for element in collection {
            self.add(element);
        }
    }
}

impl<'a, T, F> iter::IntoIterator for &'a HashSet<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

//  mod tests
