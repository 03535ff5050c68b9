use std::path::PathBuf;

use clap::Parser;
use passloom::model::{DEFAULT_OBSCURITY, MIN_LENGTH_RANGE, OBSCURITY_RANGE};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

const LONG_ABOUT: &str = "Generate master passwords for password managers. \
Mixes a random sample from the rare end of a ranked word list with any words \
you supply, then optionally sprinkles in capitals and symbols. The result is \
long enough to resist brute force and obscure enough to resist dictionary \
cracks.";

#[derive(Parser, Debug)]
#[command(name = "passloom")]
#[command(version = get_version())]
#[command(
    about = "Generate master passwords from obscure dictionary words",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Minimum number of characters in the password (10-50)
    #[arg(value_parser = parse_min_length)]
    pub min_length: usize,

    /// How obscure the password words are; smaller means more obscure (0.1-1.0)
    #[arg(long, default_value_t = DEFAULT_OBSCURITY, value_parser = parse_obscurity)]
    pub obscurity: f64,

    /// Comma separated list of user words to include
    #[arg(long = "user_words", value_delimiter = ',')]
    pub user_words: Vec<String>,

    /// Override the check for user words duplicated in the word list
    #[arg(long = "word_override")]
    pub word_override: bool,

    /// Number of random symbols to insert in the final password
    #[arg(long)]
    pub symbols: Option<usize>,

    /// Number of characters to convert to upper case in the final password
    #[arg(long)]
    pub caps: Option<usize>,

    /// Ranked word list file, one `word score` pair per line, most common first
    #[arg(long = "word_file", default_value = "common_words_ranked.txt")]
    pub word_file: PathBuf,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_min_length(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not an integer", s))?;
    if MIN_LENGTH_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "{} is not in range {}-{}",
            value,
            MIN_LENGTH_RANGE.start(),
            MIN_LENGTH_RANGE.end()
        ))
    }
}

fn parse_obscurity(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if OBSCURITY_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "{} is not in range {}-{}",
            value,
            OBSCURITY_RANGE.start(),
            OBSCURITY_RANGE.end()
        ))
    }
}
