use std::ops::RangeInclusive;

use crate::error::{PassloomError, Result};

/// Allowed range for the minimum password length.
pub const MIN_LENGTH_RANGE: RangeInclusive<usize> = 10..=50;

/// Allowed range for the obscurity factor.
pub const OBSCURITY_RANGE: RangeInclusive<f64> = 0.1..=1.0;

/// Obscurity factor used when none is given.
pub const DEFAULT_OBSCURITY: f64 = 0.9;

/// One ranked word: the word itself and its usage frequency score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub score: u64,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, score: u64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Options for a single generation run.
///
/// Constructed through [`GenOptions::new`], which range-checks the two
/// numeric knobs, then refined with the `with_*` builders.
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Minimum number of characters in the password.
    pub min_length: usize,
    /// Fraction of the word list to keep, counted from the rare end.
    pub obscurity: f64,
    /// Words the user wants woven into the password.
    pub user_words: Vec<String>,
    /// Allow user words that also appear in the word list.
    pub word_override: bool,
    /// Number of random symbols to insert, if any.
    pub symbols: Option<usize>,
    /// Number of characters to uppercase, if any.
    pub caps: Option<usize>,
}

impl GenOptions {
    pub fn new(min_length: usize, obscurity: f64) -> Result<Self> {
        if !MIN_LENGTH_RANGE.contains(&min_length) {
            return Err(PassloomError::Config(format!(
                "minimum length {} is outside {}-{}",
                min_length,
                MIN_LENGTH_RANGE.start(),
                MIN_LENGTH_RANGE.end()
            )));
        }
        if !OBSCURITY_RANGE.contains(&obscurity) {
            return Err(PassloomError::Config(format!(
                "obscurity factor {} is outside {}-{}",
                obscurity,
                OBSCURITY_RANGE.start(),
                OBSCURITY_RANGE.end()
            )));
        }
        Ok(Self {
            min_length,
            obscurity,
            user_words: Vec::new(),
            word_override: false,
            symbols: None,
            caps: None,
        })
    }

    /// Set the user words, dropping blank entries.
    pub fn with_user_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        self
    }

    pub fn with_word_override(mut self, word_override: bool) -> Self {
        self.word_override = word_override;
        self
    }

    pub fn with_symbols(mut self, symbols: Option<usize>) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_caps(mut self, caps: Option<usize>) -> Self {
        self.caps = caps;
        self
    }
}
