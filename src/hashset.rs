//! #   The HashSet.
//!
//! The `HashSet` is a set of unique elements, hashed by a function supplied at
//! construction, and supporting only insertion and look-up.
//!
//! ##  Under the covers.
//!
//! Under the covers the `HashSet` is a separately-chained hash table: an array
//! of buckets, each holding a singly linked chain of the elements whose hash,
//! modulo the number of buckets, designates that bucket.
//!
//! The main consequences are:
//!
//! -   The hash function need not be good, only deterministic: a poor hash
//!     function degrades performance, never correctness.
//! -   Whenever an insertion raises the load factor, `len / capacity`, above
//!     0.8 the bucket array is doubled, and every element is moved to its
//!     bucket under the new capacity.
//!
//! #   Example: basic
//!
//! General usage of `HashSet` involve adding elements, either using `add`, to
//! add one element at a time, or `extend`, to add multiple elements at once.
//!
//! The faillible equivalents exist too: `try_add` and `try_with_capacity` will
//! return a `Result` indicating whether the operation succeeded, and the cause
//! of its failure if it did not.
//!
//! ```
//! use chainset::hashset::HashSet;
//!
//! let mut set = HashSet::new(|e: &u32| *e as usize);
//! assert!(set.add(1));
//! assert!(set.add(2));
//! assert!(!set.add(2));
//!
//! assert_eq!(2, set.len());
//! assert!(set.contains(&1));
//!
//! set.extend([3, 4, 5].iter().copied());
//!
//! assert_eq!(5, set.len());
//! assert!(set.contains(&4));
//!
//! for e in &set {
//!     println!("{}", e);
//! }
//! ```
//!
//! #   Example: managing capacity
//!
//! The capacity is the number of buckets; it starts at 10 by default, or at the
//! number requested with `with_capacity`, and only ever doubles.
//!
//! ```
//! use chainset::hashset::HashSet;
//!
//! let mut set = HashSet::new(|e: &u32| *e as usize);
//! set.extend(0..8);
//!
//! //  8 / 10 does not exceed the maximum load factor of 0.8.
//! assert_eq!(10, set.capacity());
//!
//! set.add(8);
//!
//! //  9 / 10 does.
//! assert_eq!(20, set.capacity());
//! assert!((0..9).all(|e| set.contains(&e)));
//! ```
//!
//! #   Example: looking under the covers
//!
//! The placement of elements can be observed with `elements_at_index` and
//! `is_element_at_index`, handy to assess the quality of a hash function.
//!
//! ```
//! use chainset::hashset::HashSet;
//!
//! let mut set = HashSet::new(|e: &u32| *e as usize);
//! set.extend([1, 11, 2].iter().copied());
//!
//! assert_eq!(2, set.elements_at_index(1));
//! assert!(set.is_element_at_index(&11, 1));
//! assert!(!set.is_element_at_index(&11, 2));
//!
//! //  Out of bounds indexes hold no element.
//! assert_eq!(0, set.elements_at_index(10));
//! ```

pub mod iterator;

mod hashset;

pub use self::hashset::HashSet;

#[cfg(feature = "with-std")]
pub use super::hashcore::hooks::default_hash;

use super::failure;
use super::hashcore;
use super::root;
