//! #   The WordChecker.
//!
//! The `WordChecker` validates words against a dictionary, any container
//! implementing `Set<String>`, and proposes corrections for unknown words.
//!
//! Corrections are the dictionary words at a single edit of the unknown word,
//! the edits being, in order:
//!
//! -   Swapping two adjacent characters.
//! -   Inserting one letter of the alphabet, at any position.
//! -   Deleting one character.
//! -   Substituting one letter of the alphabet to one character.
//! -   Splitting the word in two, in which case both halves must be words; the
//!     suggestion is then the two halves separated by a space.
//!
//! Each suggestion is reported once, even if several edits produce it.
//!
//! #   Example
//!
//! ```
//! use chainset::checker::WordChecker;
//! use chainset::hashset::{default_hash, HashSet};
//!
//! let mut words = HashSet::new(default_hash::<String>);
//! for word in ["SPEED", "SPED", "HE", "LLO", "HELL"].iter() {
//!     words.add(word.to_string());
//! }
//!
//! let checker = WordChecker::new(&words);
//!
//! assert!(checker.word_exists("SPEED"));
//! assert!(!checker.word_exists("SPEEED"));
//!
//! assert_eq!(vec!["SPEED".to_string()], checker.find_suggestions("SPEEED"));
//! assert_eq!(vec!["HELL".to_string(), "HE LLO".to_string()], checker.find_suggestions("HELLO"));
//! ```

pub mod edits;

mod checker;

pub use self::checker::WordChecker;
pub use self::edits::ALPHABET;

use super::root;
use super::set;
