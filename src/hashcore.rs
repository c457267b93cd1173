//! Internal definition of the HashSet storage.
//!
//! The storage is a boxed slice of chains, each chain a singly linked list of
//! boxed entries. The `Table` owns the chains, which own their entries.

pub mod capacity;
pub mod chain;
pub mod table;

#[cfg(feature = "with-std")]
pub mod hooks;

use super::failure;
use super::root;
