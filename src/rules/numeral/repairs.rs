//! Targeted number-word repair patterns.
//!
//! The generic normalizer collapses runs of three or more identical letters
//! but leaves doubles alone, which is not enough for number words: `thirrty`
//! survives it untouched, and `threee` comes out as `thre`. Every vocabulary
//! word therefore gets its own pattern in which each letter may repeat, with
//! doubled letters of the canonical spelling folded into a single `x+`.
//!
//! ```text
//! "three"   -> \bt+h+r+e+\b      matches thre, three, thhreee
//! "seventy" -> \bs+e+v+e+n+t+y+\b
//! ```
//!
//! Patterns are anchored on word boundaries so that ordinary words which merely
//! contain a number word (`bone`, `threat`) are never rewritten. The pass
//! assumes obfuscation only duplicates letters and never deletes them.
//!
//! A few ordinary English words are themselves a repetition of a number word
//! (`teen` fits `t+e+n+`); they are listed in `ORDINARY_WORDS` and kept as is.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::rules::numeral::words::repair_order;

#[derive(Debug)]
pub(crate) struct Repair {
    pub word: &'static str,
    pub pattern: Regex,
}

static REPAIRS: Lazy<Vec<Repair>> = Lazy::new(|| {
    repair_order()
        .map(|word| Repair {
            word,
            pattern: Regex::new(&repetition_pattern(word)).expect("number-word repair pattern must compile"),
        })
        .collect()
});

/// Real words that a repair pattern matches but that are not number words.
const ORDINARY_WORDS: &[&str] = &["teen"];

/// Build `\bw+o+r+d+\b` for `word`, folding consecutive duplicate letters.
fn repetition_pattern(word: &str) -> String {
    let mut pattern = String::from(r"\b");
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if prev != Some(c) {
            pattern.push(c);
            pattern.push('+');
        }
        prev = Some(c);
    }
    pattern.push_str(r"\b");
    pattern
}

/// Rewrite every obfuscated number word in `text` to its canonical spelling.
pub(crate) fn repair_number_words(text: &str) -> String {
    let mut out = text.to_string();
    for repair in REPAIRS.iter() {
        let replaced = repair.pattern.replace_all(&out, |caps: &Captures| {
            let found = &caps[0];
            if ORDINARY_WORDS.iter().any(|word| *word == found) { found.to_string() } else { repair.word.to_string() }
        });
        if let Cow::Owned(replaced) = replaced {
            out = replaced;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_folds_doubled_letters() {
        assert_eq!(repetition_pattern("three"), r"\bt+h+r+e+\b");
        assert_eq!(repetition_pattern("seventy"), r"\bs+e+v+e+n+t+y+\b");
        assert_eq!(repetition_pattern("hundred"), r"\bh+u+n+d+r+e+d+\b");
    }

    #[test]
    fn repairs_repeated_letters() {
        assert_eq!(repair_number_words("thirrty"), "thirty");
        assert_eq!(repair_number_words("fiftty sevven"), "fifty seven");
        assert_eq!(repair_number_words("thre"), "three");
        assert_eq!(repair_number_words("thirten"), "thirteen");
        assert_eq!(repair_number_words("twoo onne"), "two one");
    }

    #[test]
    fn leaves_other_words_alone() {
        assert_eq!(repair_number_words("the bone threat is done"), "the bone threat is done");
        assert_eq!(repair_number_words("seventy three"), "seventy three");
    }

    #[test]
    fn ordinary_words_matching_a_pattern_are_kept() {
        assert_eq!(repair_number_words("a teen ager"), "a teen ager");
        assert_eq!(repair_number_words("tenn teen teeen"), "ten teen ten");
    }
}
