//! Operand extraction from normalized text.
//!
//! Scans whitespace tokens left to right. A number word starts an operand; if
//! the very next token is a number word too, the two are merged by addition
//! (`twenty three` -> 23) and the scan skips both. Merging never chains past
//! one pair.
//!
//! ```text
//! tokens:  what is twenty three plus five
//!                  ^^^^^^^^^^^^      ^^^^
//! operands:        23 (tokens 2..4)  5 (tokens 5..6)
//! ```

use crate::rules::numeral::words::{strip_trailing, value_of};
use crate::{Operand, Range};

pub(crate) fn extract_operands(normalized: &str) -> Vec<Operand> {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let mut operands = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let Some(first) = value_of(tokens[i]) else {
            i += 1;
            continue;
        };

        let mut operand =
            Operand { value: first, range: Range { start: i, end: i + 1 }, words: vec![word(tokens[i])] };

        if let Some(second) = tokens.get(i + 1).and_then(|t| value_of(t)) {
            operand.value += second;
            operand.range.end = i + 2;
            operand.words.push(word(tokens[i + 1]));
        }

        i = operand.range.end;
        operands.push(operand);
    }

    operands
}

fn word(token: &str) -> String {
    strip_trailing(token).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(text: &str) -> Vec<f64> {
        extract_operands(text).into_iter().map(|op| op.value).collect()
    }

    #[test]
    fn merges_compound_pairs() {
        assert_eq!(values("twenty three"), vec![23.0]);
        assert_eq!(values("twenty three plus five"), vec![23.0, 5.0]);
    }

    #[test]
    fn never_chains_beyond_a_pair() {
        assert_eq!(values("twenty three four"), vec![23.0, 4.0]);
        assert_eq!(values("one two three four five"), vec![3.0, 7.0, 5.0]);
    }

    #[test]
    fn records_ranges_and_words() {
        let ops = extract_operands("add forty two and nine");
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].range, Range { start: 1, end: 3 });
        assert_eq!(ops[0].words, vec!["forty", "two"]);
        assert_eq!(ops[1].range, Range { start: 4, end: 5 });
        assert_eq!(ops[1].words, vec!["nine"]);
    }

    #[test]
    fn ignores_digits_and_unknown_words() {
        assert!(values("what is 5 plus 3").is_empty());
        assert!(values("").is_empty());
    }

    #[test]
    fn hundred_merges_by_addition() {
        assert_eq!(values("seventy hundred"), vec![170.0]);
    }
}
