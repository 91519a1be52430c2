//! Challenge normalization.
//!
//! Turns adversarially obfuscated text into lowercase, single-spaced ASCII
//! alphanumeric tokens. The passes run in a fixed order because each one
//! relies on the cleanup done by the previous:
//!
//! ```text
//! "Wh@t iS  tHiRRRty + F.i.v.e  pLuS  sEvVen?"
//!   (1) join_split_letters    "Wht iS  tHiRRRty + Five  pLuS  sEvVen?"
//!   (2) strip_symbols         "Wht iS  tHiRRRty   Five  pLuS  sEvVen "
//!   (3) collapse_letter_runs  "tHiRty", doubles such as "vV" kept
//!   (4) squash_whitespace     "wht is thirty five plus sevven"
//!   (5) repair_number_words   "wht is thirty five plus seven"
//! ```
//!
//! Passes (1)-(4) are generic noise removal; (5) is the targeted number-word
//! repair from `rules::numeral::repairs`. They stay separate: folding the
//! repair into the generic collapse would start eating legitimate double
//! letters.

use crate::rules::numeral::repairs::repair_number_words;

/// Run every normalization pass over `challenge`.
///
/// `repair` toggles the targeted number-word pass; the generic passes always
/// run.
pub(crate) fn normalize(challenge: &str, repair: bool) -> String {
    let joined = join_split_letters(challenge);
    let stripped = strip_symbols(&joined);
    let collapsed = collapse_letter_runs(&stripped);
    let squashed = squash_whitespace(&collapsed);
    if repair { repair_number_words(&squashed) } else { squashed }
}

/// Delete any single non-alphanumeric, non-whitespace character sitting
/// between two ASCII letters.
///
/// Neighbours are taken from the original text, so a word spelled out with a
/// separator between every letter (`t-h-i-r-t-y`) joins completely.
pub(crate) fn join_split_letters(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let is_separator = !c.is_alphanumeric() && !c.is_whitespace();
        let between_letters = i > 0
            && chars[i - 1].is_ascii_alphabetic()
            && chars.get(i + 1).is_some_and(|next| next.is_ascii_alphabetic());

        if !(is_separator && between_letters) {
            out.push(c);
        }
    }

    out
}

/// Replace every character that is not an ASCII letter, digit or whitespace
/// with a space.
pub(crate) fn strip_symbols(text: &str) -> String {
    text.chars().map(|c| if c.is_ascii_alphanumeric() || c.is_whitespace() { c } else { ' ' }).collect()
}

/// Collapse runs of three or more identical letters (case-insensitive) to the
/// first letter of the run. Runs of exactly two are kept.
pub(crate) fn collapse_letter_runs(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        if c.is_ascii_alphabetic() {
            while chars.get(i + run).is_some_and(|next| next.eq_ignore_ascii_case(&c)) {
                run += 1;
            }
        }

        if run >= 3 {
            out.push(c);
        } else {
            out.extend(&chars[i..i + run]);
        }
        i += run;
    }

    out
}

/// Collapse whitespace runs to one space, trim and lowercase.
pub(crate) fn squash_whitespace(text: &str) -> String {
    regex!(r"\s+").replace_all(text.trim(), " ").to_lowercase()
}
