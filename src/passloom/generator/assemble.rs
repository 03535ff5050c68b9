use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PassloomError, Result};
use crate::model::GenOptions;
use crate::wordlist::WordList;

/// Build the password word sequence.
///
/// User words come first. Each one is checked against the filtered list
/// and rejected as a [`PassloomError::DuplicateWord`] unless the override
/// flag is set. The sequence is then topped up with uniformly random
/// not-yet-used words from the list until the concatenated length (no
/// separators) reaches `opts.min_length`. The length test runs after each
/// append, so the result is at least the minimum but otherwise unbounded.
pub fn collect_words<R: Rng>(
    rng: &mut R,
    list: &WordList,
    opts: &GenOptions,
) -> Result<Vec<String>> {
    let mut sequence: Vec<String> = Vec::new();

    for user_word in &opts.user_words {
        if list.contains(user_word) && !opts.word_override {
            return Err(PassloomError::DuplicateWord(user_word.clone()));
        }
        sequence.push(user_word.clone());
    }

    // Words still eligible for a random draw. Drawing without replacement
    // from here is uniform over the unused words, the same distribution as
    // drawing from the whole list and rejecting repeats.
    let mut remaining: Vec<&str> = list
        .words()
        .filter(|w| !sequence.iter().any(|s| s == w))
        .collect();

    let mut combined: usize = sequence.iter().map(|w| w.len()).sum();
    while combined < opts.min_length {
        if remaining.is_empty() {
            return Err(PassloomError::WordsExhausted {
                needed: opts.min_length,
            });
        }
        let word = remaining.swap_remove(rng.gen_range(0..remaining.len()));
        combined += word.len();
        sequence.push(word.to_string());
    }

    Ok(sequence)
}

/// Shuffle the sequence uniformly and concatenate with no separators.
pub fn shuffle_and_join<R: Rng>(rng: &mut R, words: &mut [String]) -> String {
    words.shuffle(rng);
    words.concat()
}
