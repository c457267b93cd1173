//! The Failure and Result types of this library.
//!
//! The `HashSet` supports faillible growth. Any method which may need to grow the bucket array may fail. The cause of
//! the error is then represented as a `Failure`.
//!
//! All faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! A failed operation leaves the collection untouched.

use super::root::{error, fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The number of buckets cannot be doubled without overflowing.
    CapacityOverflow,
    /// The allocator could not allocate the bucket array.
    OutOfMemory,
}

impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

#[cold]
#[inline(never)]
pub(crate) fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn failure_display() {
        assert_eq!("CapacityOverflow", format!("{}", Failure::CapacityOverflow));
        assert_eq!("OutOfMemory", format!("{}", Failure::OutOfMemory));
    }

    #[test]
    #[should_panic(expected = "OutOfMemory")]
    fn failure_panic() {
        panic_from_failure(Failure::OutOfMemory);
    }
}
