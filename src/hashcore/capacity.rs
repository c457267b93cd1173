//! The HashSet capacity.
//!
//! Apart from holding the number of buckets itself, assembles the computing
//! primitives based off the capacity: bucket selection, load checks, growth.

use super::failure::{Failure, Result};
use super::root::cmp;

//  The number of buckets of a freshly created set.
pub const DEFAULT_CAPACITY: usize = 10;

//  The maximum load factor, as a fraction: 4/5 = 0.8.
const MAX_LOAD_NUMERATOR: u128 = 4;
const MAX_LOAD_DENOMINATOR: u128 = 5;

//  Capacity.
//
//  The number of buckets of a table; always strictly positive.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Capacity(usize);

impl Capacity {
    //  Creates an instance, rounding 0 up to 1.
    pub fn new(buckets: usize) -> Self { Self(cmp::max(buckets, 1)) }

    //  Returns the number of buckets.
    pub fn buckets(self) -> usize { self.0 }

    //  Returns the index of the bucket in which an element of hash `hash`
    //  belongs.
    pub fn bucket_of(self, hash: usize) -> BucketIndex {
        BucketIndex(hash % self.0)
    }

    //  Returns whether `size` elements exceed the maximum load factor.
    //
    //  Computed in u128 so that neither side may overflow.
    pub fn is_overloaded(self, size: Size) -> bool {
        size.0 as u128 * MAX_LOAD_DENOMINATOR > self.0 as u128 * MAX_LOAD_NUMERATOR
    }

    //  Returns the doubled capacity.
    pub fn try_double(self) -> Result<Self> {
        self.0.checked_mul(2).map(Self).ok_or(Failure::CapacityOverflow)
    }
}

impl Default for Capacity {
    fn default() -> Self { Self(DEFAULT_CAPACITY) }
}

/// The index of a bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BucketIndex(pub usize);

/// The number of elements in all buckets.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size(pub usize);

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn capacity_new() {
    assert_eq!(1, Capacity::new(0).buckets());
    assert_eq!(1, Capacity::new(1).buckets());
    assert_eq!(17, Capacity::new(17).buckets());
    assert_eq!(DEFAULT_CAPACITY, Capacity::default().buckets());
}

#[test]
fn capacity_bucket_of() {
    let capacity = Capacity::new(10);

    assert_eq!(BucketIndex(0), capacity.bucket_of(0));
    assert_eq!(BucketIndex(9), capacity.bucket_of(9));
    assert_eq!(BucketIndex(0), capacity.bucket_of(10));
    assert_eq!(BucketIndex(3), capacity.bucket_of(1_000_003));
    assert_eq!(BucketIndex(usize::MAX % 10), capacity.bucket_of(usize::MAX));
}

#[test]
fn capacity_is_overloaded() {
    let capacity = Capacity::new(10);

    //  8 / 10 = 0.8 is not strictly greater than 0.8.
    assert!(!capacity.is_overloaded(Size(0)));
    assert!(!capacity.is_overloaded(Size(8)));
    assert!(capacity.is_overloaded(Size(9)));
    assert!(capacity.is_overloaded(Size(10)));

    let capacity = Capacity::new(1);

    assert!(!capacity.is_overloaded(Size(0)));
    assert!(capacity.is_overloaded(Size(1)));

    let capacity = Capacity::new(usize::MAX);

    assert!(!capacity.is_overloaded(Size(usize::MAX / 5 * 4)));
    assert!(capacity.is_overloaded(Size(usize::MAX)));
}

#[test]
fn capacity_try_double() {
    assert_eq!(Ok(Capacity::new(20)), Capacity::new(10).try_double());
    assert_eq!(Ok(Capacity::new(2)), Capacity::new(0).try_double());
    assert_eq!(
        Err(Failure::CapacityOverflow),
        Capacity::new(usize::MAX / 2 + 1).try_double()
    );
}

}
