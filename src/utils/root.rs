//! Re-export core/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{cmp, fmt, hash, iter, result, slice, sync};

#[cfg(not(feature = "with-std"))]
pub use alloc::{boxed, collections, string, vec};

#[cfg(feature = "with-std")]
pub use std::{boxed, cmp, collections, fmt, hash, iter, result, slice, string, sync, vec};

#[cfg(feature = "with-std")]
pub use std::error;

#[cfg(not(feature = "with-std"))]
pub mod error {

pub trait Error : super::fmt::Debug + super::fmt::Display {}

}
