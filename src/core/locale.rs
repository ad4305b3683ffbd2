//! Turkish-aware case folding for the word games.
//!
//! The default Unicode mapping sends `i` to `I`, which breaks Turkish words
//! (`kitap` must become `KİTAP`, `ırmak` must become `IRMAK`). Both the
//! target word and every guess go through the same function so comparisons
//! stay consistent.

/// Upper-case a single letter using Turkish rules for dotted/dotless i.
#[must_use]
pub fn upper_letter(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                // Multi-char expansions (e.g. ß) keep the original letter.
                _ => c,
            }
        }
    }
}

/// Upper-case a whole word, trimming surrounding whitespace.
///
/// ```
/// use playground_engine::core::locale::normalize_word;
///
/// assert_eq!(normalize_word(" kitap "), "KİTAP");
/// assert_eq!(normalize_word("ırmak"), "IRMAK");
/// ```
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().chars().map(upper_letter).collect()
}

/// Number of letters (not bytes) in a word.
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_i() {
        assert_eq!(upper_letter('i'), 'İ');
        assert_eq!(upper_letter('ı'), 'I');
        assert_eq!(upper_letter('ş'), 'Ş');
        assert_eq!(upper_letter('ğ'), 'Ğ');
        assert_eq!(upper_letter('A'), 'A');
    }

    #[test]
    fn test_multi_char_expansion_kept() {
        assert_eq!(upper_letter('ß'), 'ß');
    }

    #[test]
    fn test_letter_count_is_char_based() {
        assert_eq!(letter_count("ÇİÇEK"), 5);
        assert!("ÇİÇEK".len() > 5);
    }
}
