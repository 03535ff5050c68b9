use rand::Rng;

use crate::error::{PassloomError, Result};

/// Keyboard symbols inserted into generated passwords.
pub const SYMBOLS: &[char] = &[
    '!', '@', '£', '$', '%', '^', '&', '*', '(', ')', '-', '_', '+', '=', '{', '}', '[', ']', ':',
    ';', '|', '<', '>', '?',
];

/// Uppercase `count` unique random characters.
///
/// Returns the new string and the chosen indices in selection order. The
/// length never changes. Asking for more positions than the string has is
/// a [`PassloomError::Sampling`] error.
pub fn capitalize<R: Rng>(rng: &mut R, password: &str, count: usize) -> Result<(String, Vec<usize>)> {
    let mut buffer: Vec<char> = password.chars().collect();
    if count > buffer.len() {
        return Err(PassloomError::Sampling {
            requested: count,
            available: buffer.len(),
        });
    }

    let indices: Vec<usize> = rand::seq::index::sample(rng, buffer.len(), count)
        .into_iter()
        .collect();
    for &i in &indices {
        buffer[i] = buffer[i].to_ascii_uppercase();
    }
    Ok((buffer.into_iter().collect(), indices))
}

/// Insert `count` random symbols at unique interior positions.
///
/// Positions are drawn from `[1, len - 1)` of the pre-insertion string and
/// applied in selection order to the growing buffer, so a later insertion
/// lands after whatever earlier insertions shifted. The first and last
/// characters of the original string stay first and last.
pub fn insert_symbols<R: Rng>(
    rng: &mut R,
    password: &str,
    count: usize,
) -> Result<(String, Vec<usize>)> {
    let mut buffer: Vec<char> = password.chars().collect();
    let available = buffer.len().saturating_sub(2);
    if count > available {
        return Err(PassloomError::Sampling {
            requested: count,
            available,
        });
    }

    let indices: Vec<usize> = rand::seq::index::sample(rng, available, count)
        .into_iter()
        .map(|i| i + 1)
        .collect();
    for &i in &indices {
        let symbol = SYMBOLS[rng.gen_range(0..SYMBOLS.len())];
        buffer.insert(i, symbol);
    }
    Ok((buffer.into_iter().collect(), indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn capitalize_preserves_length_and_uppercases_count_chars() {
        let mut rng = StdRng::seed_from_u64(1);
        let (result, indices) = capitalize(&mut rng, "zephyrquasar", 4).unwrap();
        assert_eq!(result.len(), "zephyrquasar".len());
        assert_eq!(indices.len(), 4);
        let upper = result.chars().filter(|c| c.is_ascii_uppercase()).count();
        assert_eq!(upper, 4);
    }

    #[test]
    fn capitalize_indices_are_unique_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(8);
        let (_, mut indices) = capitalize(&mut rng, "zephyrquasar", 6).unwrap();
        assert!(indices.iter().all(|&i| i < 12));
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), 6);
    }

    #[test]
    fn capitalize_leaves_other_characters_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = "zephyrquasar";
        let (result, indices) = capitalize(&mut rng, source, 3).unwrap();
        for (i, (old, new)) in source.chars().zip(result.chars()).enumerate() {
            if indices.contains(&i) {
                assert_eq!(new, old.to_ascii_uppercase());
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn capitalize_rejects_count_beyond_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = capitalize(&mut rng, "short", 6).unwrap_err();
        assert!(matches!(
            err,
            PassloomError::Sampling {
                requested: 6,
                available: 5
            }
        ));
    }

    #[test]
    fn insert_symbols_grows_by_count_with_symbols_only() {
        let mut rng = StdRng::seed_from_u64(4);
        let source = "zephyrquasar";
        let (result, indices) = insert_symbols(&mut rng, source, 3).unwrap();
        assert_eq!(result.chars().count(), source.len() + 3);
        assert_eq!(indices.len(), 3);

        let letters: String = result.chars().filter(|c| !SYMBOLS.contains(c)).collect();
        assert_eq!(letters, source);
        assert_eq!(result.chars().filter(|c| SYMBOLS.contains(c)).count(), 3);
    }

    #[test]
    fn insert_symbols_never_touches_the_ends() {
        let source = "zephyrquasar";
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (result, indices) = insert_symbols(&mut rng, source, 5).unwrap();
            assert!(indices.iter().all(|&i| i >= 1 && i < source.len() - 1));
            assert!(result.starts_with('z'));
            assert!(result.ends_with('r'));
        }
    }

    #[test]
    fn insert_symbols_rejects_count_beyond_interior() {
        let mut rng = StdRng::seed_from_u64(1);
        // "abcd" has two interior positions
        let err = insert_symbols(&mut rng, "abcd", 3).unwrap_err();
        assert!(matches!(
            err,
            PassloomError::Sampling {
                requested: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn same_seed_gives_identical_transforms() {
        let mut first = StdRng::seed_from_u64(21);
        let mut second = StdRng::seed_from_u64(21);
        let (a, ai) = capitalize(&mut first, "zephyrquasar", 4).unwrap();
        let (b, bi) = capitalize(&mut second, "zephyrquasar", 4).unwrap();
        assert_eq!(a, b);
        assert_eq!(ai, bi);

        let (a, ai) = insert_symbols(&mut first, &a, 3).unwrap();
        let (b, bi) = insert_symbols(&mut second, &b, 3).unwrap();
        assert_eq!(a, b);
        assert_eq!(ai, bi);
    }
}
