use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassloomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed word list at line {line}: {content:?} (expected `word score`)")]
    MalformedLine { line: usize, content: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User word '{0}' is already in the word list")]
    DuplicateWord(String),

    #[error("Obscurity cut left no words to sample from")]
    EmptyWordList,

    #[error("Ran out of unique words before reaching the minimum length of {needed}")]
    WordsExhausted { needed: usize },

    #[error("Cannot pick {requested} unique positions out of {available}")]
    Sampling { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, PassloomError>;
