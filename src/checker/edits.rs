//! The single edits of a word.
//!
//! Each function enumerates, lazily, the candidates produced by one family of
//! edits. Candidates may repeat, for example swapping two equal characters
//! yields the word itself.
//!
//! ```
//! use chainset::checker::edits;
//!
//! let word: Vec<char> = "ABC".chars().collect();
//!
//! let swaps: Vec<String> = edits::swaps(&word).collect();
//! assert_eq!(vec!["BAC", "ACB"], swaps);
//!
//! let splits: Vec<(String, String)> = edits::splits(&word).collect();
//! assert_eq!(("A".to_string(), "BC".to_string()), splits[0]);
//! assert_eq!(("AB".to_string(), "C".to_string()), splits[1]);
//! ```

use super::root::iter;
use super::root::string::String;

/// The default alphabet: the 26 upper-case letters of the latin alphabet.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Returns the candidates obtained by swapping each pair of adjacent
/// characters.
pub fn swaps(word: &[char]) -> impl iter::Iterator<Item = String> + '_ {
    (1..word.len()).map(move |i| {
        let mut candidate = word.to_vec();
        candidate.swap(i - 1, i);
        candidate.into_iter().collect::<String>()
    })
}

/// Returns the candidates obtained by inserting each letter of `alphabet`
/// before each character, and after the last.
pub fn insertions<'a>(word: &'a [char], alphabet: &'a [char])
    -> impl iter::Iterator<Item = String> + 'a
{
    (0..=word.len()).flat_map(move |i| {
        alphabet.iter().map(move |letter| {
            word[..i].iter()
                .chain(iter::once(letter))
                .chain(word[i..].iter())
                .collect::<String>()
        })
    })
}

/// Returns the candidates obtained by deleting each character.
pub fn deletions(word: &[char]) -> impl iter::Iterator<Item = String> + '_ {
    (0..word.len()).map(move |i| {
        word[..i].iter().chain(word[i + 1..].iter()).collect::<String>()
    })
}

/// Returns the candidates obtained by replacing each character by each letter
/// of `alphabet`.
///
/// Replacing a character by itself yields the word itself.
pub fn substitutions<'a>(word: &'a [char], alphabet: &'a [char])
    -> impl iter::Iterator<Item = String> + 'a
{
    (0..word.len()).flat_map(move |i| {
        alphabet.iter().map(move |letter| {
            word[..i].iter()
                .chain(iter::once(letter))
                .chain(word[i + 1..].iter())
                .collect::<String>()
        })
    })
}

/// Returns the pairs of non-empty halves obtained by splitting the word
/// between each pair of adjacent characters.
pub fn splits(word: &[char]) -> impl iter::Iterator<Item = (String, String)> + '_ {
    (1..word.len()).map(move |i| {
        (word[..i].iter().collect::<String>(), word[i..].iter().collect::<String>())
    })
}

//  mod tests
