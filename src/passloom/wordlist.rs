use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PassloomError, Result};
use crate::model::WordEntry;

/// A ranked word list, most common word first.
///
/// File order is load-bearing: the obscurity cut assumes the tail of the
/// list holds the rarer words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Load a word list file, one `word score` pair per line.
    ///
    /// Every line must split into exactly two whitespace-separated tokens
    /// with an integer score; anything else is a [`PassloomError::MalformedLine`]
    /// carrying the 1-based line number.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let mut tokens = line.split_whitespace();
            let (word, score) = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(word), Some(score), None) => (word, score),
                _ => return Err(malformed(number, &line)),
            };
            let score: u64 = score.parse().map_err(|_| malformed(number, &line))?;
            entries.push(WordEntry::new(word, score));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    /// Trim to the most obscure fraction of the list.
    ///
    /// Keeps the trailing `floor(len * factor)` entries. A cut of zero is
    /// reported as [`PassloomError::EmptyWordList`] rather than silently
    /// degrading downstream sampling.
    pub fn obscure(&self, factor: f64) -> Result<WordList> {
        let cut = (self.entries.len() as f64 * factor) as usize;
        if cut == 0 {
            return Err(PassloomError::EmptyWordList);
        }
        let start = self.entries.len() - cut;
        Ok(Self {
            entries: self.entries[start..].to_vec(),
        })
    }
}

fn malformed(index: usize, line: &str) -> PassloomError {
    PassloomError::MalformedLine {
        line: index + 1,
        content: line.to_string(),
    }
}
