//! The WordChecker

use log::trace;

use super::edits::{self, ALPHABET};
use super::root::string::String;
use super::root::vec::Vec;
use super::set::Set;

/// `WordChecker`
///
/// A read-only view over a dictionary, of any `Set<String>` type.
pub struct WordChecker<'a, S: ?Sized> {
    words: &'a S,
    alphabet: &'a [char],
}

impl<'a, S> WordChecker<'a, S>
where
    S: ?Sized + Set<String>,
{
    /// Creates a new instance, suggesting upper-case latin letters for
    /// insertions and substitutions.
    pub fn new(words: &'a S) -> Self { Self::with_alphabet(words, &ALPHABET) }

    /// Creates a new instance, suggesting letters of `alphabet` for
    /// insertions and substitutions.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use std::collections::BTreeSet;
    /// #   use chainset::checker::WordChecker;
    /// let words: BTreeSet<String> = ["été".to_string()].into_iter().collect();
    /// let checker = WordChecker::with_alphabet(&words, &['é', 't']);
    ///
    /// assert_eq!(vec!["été".to_string()], checker.find_suggestions("ét"));
    /// ```
    pub fn with_alphabet(words: &'a S, alphabet: &'a [char]) -> Self {
        WordChecker { words, alphabet }
    }

    /// Returns whether `word` is in the dictionary.
    pub fn word_exists(&self, word: &str) -> bool {
        self.words.contains(&String::from(word))
    }

    /// Returns the dictionary words a single edit away from `word`.
    ///
    /// The suggestions are listed without duplicates, in the order of the
    /// edits which produced them first: swaps, insertions, deletions,
    /// substitutions and finally splits.
    ///
    /// `word` itself is suggested only when an edit reproduces it, such as
    /// swapping two identical adjacent characters.
    pub fn find_suggestions(&self, word: &str) -> Vec<String> {
        let characters: Vec<char> = word.chars().collect();

        let mut suggestions = Vec::new();

        let candidates = edits::swaps(&characters)
            .chain(edits::insertions(&characters, self.alphabet))
            .chain(edits::deletions(&characters))
            .chain(edits::substitutions(&characters, self.alphabet));

        for candidate in candidates {
            if self.words.contains(&candidate) {
                push_unique(&mut suggestions, candidate);
            }
        }

        for (left, right) in edits::splits(&characters) {
            if self.words.contains(&left) && self.words.contains(&right) {
                let mut candidate = left;
                candidate.push(' ');
                candidate.push_str(&right);

                push_unique(&mut suggestions, candidate);
            }
        }

        trace!("{} suggestions for {:?}", suggestions.len(), word);

        suggestions
    }
}

impl<'a, S: ?Sized> Clone for WordChecker<'a, S> {
    fn clone(&self) -> Self { *self }
}

impl<'a, S: ?Sized> Copy for WordChecker<'a, S> {}

fn push_unique(suggestions: &mut Vec<String>, candidate: String) {
    if !suggestions.contains(&candidate) {
        suggestions.push(candidate);
    }
}

//  mod tests
