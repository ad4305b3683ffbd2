//! Allowed-word dictionary.

use rustc_hash::FxHashSet;

use crate::core::locale::{letter_count, normalize_word};

/// Built-in five-letter Turkish words.
const TURKISH_WORDS: &[&str] = &[
    "ELMAS", "KALEM", "KİTAP", "ARMUT", "BAHÇE", "ÇİÇEK", "DENİZ", "GÜNEŞ", "HAVUZ", "IRMAK",
    "KÖPEK", "LİMON", "MASAL", "ORMAN", "PEMBE", "SAKAL", "TAVUK", "ŞEKER", "YILAN", "BULUT",
    "ÇORBA", "DOLAP", "EKMEK", "HALKA", "İNSAN", "KUZEY", "MEYVE", "NEHİR", "PASTA", "SABAH",
    "TABAK", "VAPUR", "YAZAR", "ZAMAN", "AKŞAM", "BALIK", "CEVAP", "DÜNYA", "HAYAT", "KAVUN",
    "MERAK", "SEVGİ", "MAKAS", "KAZAN", "ŞARKI", "KÜREK", "SİNEK", "TEPSİ", "KEMAN",
];

/// Set of normalised words accepted as guesses.
///
/// ## Example
///
/// ```
/// use playground_engine::games::wordle::Dictionary;
///
/// let dictionary = Dictionary::new(["kitap", "kalem"]);
/// assert!(dictionary.contains("KİTAP"));
/// assert!(dictionary.contains("kalem"));
/// assert!(!dictionary.contains("masal"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, normalising every word.
    pub fn new<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize_word(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The built-in Turkish word list.
    #[must_use]
    pub fn turkish() -> Self {
        Self::new(TURKISH_WORDS)
    }

    /// Whether `word` (in any case) is allowed.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize_word(word))
    }

    /// Words with exactly `length` letters, sorted.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .words
            .iter()
            .filter(|w| letter_count(w) == length)
            .map(String::as_str)
            .collect();
        words.sort_unstable();
        words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
