//! Password assembly and post-processing.
//!
//! Pure library code: everything here returns structured results and never
//! touches stdout. The caller decides what to print.

use rand::Rng;

use crate::error::Result;
use crate::model::GenOptions;
use crate::wordlist::WordList;

pub mod assemble;
pub mod transform;

/// Everything produced along the way of one generation run.
///
/// The intermediate artifacts are kept so the CLI can print the same
/// progress trail a user would want when sanity-checking a password.
#[derive(Debug, Clone)]
pub struct GenReport {
    /// Word sequence before shuffling, user words first.
    pub word_sequence: Vec<String>,
    /// Shuffled concatenation, before any post-processing.
    pub shuffled: String,
    /// Indices that were uppercased, in selection order.
    pub cap_indices: Option<Vec<usize>>,
    /// The string after capitalization.
    pub capitalized: Option<String>,
    /// Insertion indices for symbols, in selection order.
    pub symbol_indices: Option<Vec<usize>>,
    /// The final master password.
    pub password: String,
}

/// Run the full pipeline against an already-filtered word list.
pub fn generate<R: Rng>(rng: &mut R, list: &WordList, opts: &GenOptions) -> Result<GenReport> {
    let mut words = assemble::collect_words(rng, list, opts)?;
    let word_sequence = words.clone();
    let shuffled = assemble::shuffle_and_join(rng, &mut words);

    let mut password = shuffled.clone();

    let mut cap_indices = None;
    let mut capitalized = None;
    if let Some(count) = opts.caps {
        let (result, indices) = transform::capitalize(rng, &password, count)?;
        cap_indices = Some(indices);
        capitalized = Some(result.clone());
        password = result;
    }

    let mut symbol_indices = None;
    if let Some(count) = opts.symbols {
        let (result, indices) = transform::insert_symbols(rng, &password, count)?;
        symbol_indices = Some(indices);
        password = result;
    }

    Ok(GenReport {
        word_sequence,
        shuffled,
        cap_indices,
        capitalized,
        symbol_indices,
        password,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordEntry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn list() -> WordList {
        WordList::from_entries(vec![
            WordEntry::new("zephyr", 9),
            WordEntry::new("quasar", 8),
            WordEntry::new("grotto", 7),
            WordEntry::new("vellum", 6),
            WordEntry::new("umbral", 5),
            WordEntry::new("cinder", 4),
        ])
    }

    #[test]
    fn shuffled_is_a_permutation_of_the_word_sequence() {
        let mut rng = StdRng::seed_from_u64(11);
        let opts = GenOptions::new(18, 0.9).unwrap();
        let report = generate(&mut rng, &list(), &opts).unwrap();

        let mut from_sequence: Vec<char> = report.word_sequence.concat().chars().collect();
        let mut from_shuffled: Vec<char> = report.shuffled.chars().collect();
        from_sequence.sort_unstable();
        from_shuffled.sort_unstable();
        assert_eq!(from_sequence, from_shuffled);
    }

    #[test]
    fn post_processing_is_skipped_when_not_requested() {
        let mut rng = StdRng::seed_from_u64(3);
        let opts = GenOptions::new(12, 0.9).unwrap();
        let report = generate(&mut rng, &list(), &opts).unwrap();
        assert!(report.cap_indices.is_none());
        assert!(report.capitalized.is_none());
        assert!(report.symbol_indices.is_none());
        assert_eq!(report.password, report.shuffled);
    }

    #[test]
    fn symbols_grow_the_password_by_the_requested_count() {
        let mut rng = StdRng::seed_from_u64(5);
        let opts = GenOptions::new(12, 0.9).unwrap().with_symbols(Some(3));
        let report = generate(&mut rng, &list(), &opts).unwrap();
        assert_eq!(
            report.password.chars().count(),
            report.shuffled.chars().count() + 3
        );
    }

    #[test]
    fn fixed_seed_makes_the_pipeline_deterministic() {
        let opts = GenOptions::new(20, 0.9)
            .unwrap()
            .with_user_words(vec!["ember"])
            .with_caps(Some(4))
            .with_symbols(Some(3));

        let mut first_rng = StdRng::seed_from_u64(42);
        let first = generate(&mut first_rng, &list(), &opts).unwrap();
        let mut second_rng = StdRng::seed_from_u64(42);
        let second = generate(&mut second_rng, &list(), &opts).unwrap();

        assert_eq!(first.word_sequence, second.word_sequence);
        assert_eq!(first.shuffled, second.shuffled);
        assert_eq!(first.cap_indices, second.cap_indices);
        assert_eq!(first.symbol_indices, second.symbol_indices);
        assert_eq!(first.password, second.password);
    }
}
