//! A simple spell checking example.
//!
//! In this example, the dictionary is built once, on the main thread, then shared read-only with a few checker
//! threads, each checking one sentence and printing suggestions for the words it does not know.
//!
//! The `HashSet` is not internally synchronized: mutation requires `&mut`, so once the threads are spawned no one
//! can add to it any longer, and sharing it is safe.
//!
//! Set `RUST_LOG=debug` to observe the dictionary growing.

extern crate chainset;
extern crate crossbeam_utils;
extern crate env_logger;

use chainset::checker::WordChecker;
use chainset::hashset::{default_hash, HashSet};

const DICTIONARY: &str = "
    A AN AND ARE AS AT BE BY CHECK CHECKER CHECKS EACH FOR FROM HE HELLO IN IS IT
    OF ON ONE OR SPEED THAT THE THIS TO WAS WE WITH WORD WORDS WORLD YOU
";

const SENTENCES: [&str; 3] = [
    "HELLO WROLD",
    "THE CHEKER CHECKS EACH WORDIS SPED",
    "THIS IS ONE WROD",
];

fn main() {
    env_logger::init();

    let mut dictionary = HashSet::new(default_hash::<String>);
    dictionary.extend(DICTIONARY.split_whitespace().map(String::from));

    println!("Dictionary - {} words in {} buckets", dictionary.len(), dictionary.capacity());

    let checker = WordChecker::new(&dictionary);

    crossbeam_utils::thread::scope(|scope| {
        for (index, sentence) in SENTENCES.iter().enumerate() {
            scope.spawn(move |_| {
                for word in sentence.split_whitespace() {
                    if checker.word_exists(word) {
                        continue;
                    }

                    let suggestions = checker.find_suggestions(word);

                    if suggestions.is_empty() {
                        println!("Checker {} - {}: no suggestion", index, word);
                    } else {
                        println!("Checker {} - {}: did you mean {}?", index, word, suggestions.join(", "));
                    }
                }
            });
        }
    })
    .unwrap();
}
