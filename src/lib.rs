#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Chainset Library
//!
//! A separately-chained hash set, and a spell checker built upon it.
//! -   The `HashSet`: an insert-only set of unique elements, hashed by a
//!     caller-supplied function, which doubles its bucket array whenever its
//!     load factor exceeds 0.8.
//! -   The `Set` trait: the minimal `add`/`contains`/`size` capability the
//!     spell checker relies upon.
//! -   The `WordChecker`: validates words against a `Set`, and proposes
//!     single-edit corrections for unknown ones.

#[cfg(not(feature = "with-std"))]
extern crate alloc;

pub mod checker;
pub mod failure;
pub mod hashset;
pub mod set;

mod hashcore;
mod utils;

use self::utils::root;
