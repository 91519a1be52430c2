use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Words for numbers 0..19.
pub(crate) const ZERO_NINETEEN: &[(&str, u32)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

/// Tens words (twenty, thirty, ...).
pub(crate) const TENS: &[(&str, u32)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

pub(crate) const HUNDRED: (&str, u32) = ("hundred", 100);

/// Characters stripped from the end of a token before lookup.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '?', '!', '/', '-'];

/// Map of every supported number word to its value.
static NUMBER_WORDS: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| ZERO_NINETEEN.iter().chain(TENS).chain(std::iter::once(&HUNDRED)).copied().collect());

/// Look up the value of a single (already lowercased) token.
///
/// Trailing punctuation is ignored, so `"five?"` resolves like `"five"`.
pub(crate) fn value_of(token: &str) -> Option<f64> {
    NUMBER_WORDS.get(strip_trailing(token)).map(|&n| n as f64)
}

pub(crate) fn strip_trailing(token: &str) -> &str {
    token.trim_end_matches(TRAILING_PUNCTUATION)
}

/// Vocabulary in repair order: tens before everything else, so that a longer
/// word is restored before a shorter one sharing its prefix gets a chance.
pub(crate) fn repair_order() -> impl Iterator<Item = &'static str> {
    TENS.iter().chain(ZERO_NINETEEN).chain(std::iter::once(&HUNDRED)).map(|(word, _)| *word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_covers_zero_to_ninety_and_hundred() {
        assert_eq!(NUMBER_WORDS.len(), 29);
        assert_eq!(value_of("zero"), Some(0.0));
        assert_eq!(value_of("nineteen"), Some(19.0));
        assert_eq!(value_of("ninety"), Some(90.0));
        assert_eq!(value_of("hundred"), Some(100.0));
        assert_eq!(value_of("thousand"), None);
    }

    #[test]
    fn trailing_punctuation_is_ignored() {
        assert_eq!(value_of("seven,"), Some(7.0));
        assert_eq!(value_of("twelve?!"), Some(12.0));
        assert_eq!(value_of("-five"), None);
    }

    #[test]
    fn repair_order_starts_with_tens() {
        let order: Vec<_> = repair_order().collect();
        assert_eq!(order.first(), Some(&"twenty"));
        assert_eq!(order.len(), 29);
        let seventy = order.iter().position(|w| *w == "seventy").unwrap();
        let seven = order.iter().position(|w| *w == "seven").unwrap();
        assert!(seventy < seven);
    }
}
