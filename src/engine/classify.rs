//! Operation classification.
//!
//! Every keyword family is scanned (substring match over the normalized text),
//! but the operation is decided by precedence alone: product, then quotient,
//! then difference, else sum. The full set of hits is kept for diagnostics.

use crate::Operation;
use crate::rules::operation::keywords::{FAMILIES, FamilyMask};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub operation: Operation,
    /// Every family with at least one keyword present.
    pub families: FamilyMask,
    /// Matched keywords, in table order.
    pub keywords: Vec<&'static str>,
}

impl Classification {
    /// True when no keyword family matched and `Sum` was picked by default.
    pub fn defaulted(&self) -> bool {
        self.families.is_empty()
    }
}

pub(crate) fn classify(normalized: &str) -> Classification {
    let mut families = FamilyMask::empty();
    let mut keywords = Vec::new();
    let mut operation = None;

    for family in FAMILIES.iter() {
        let hits: Vec<&'static str> = family.keywords.iter().copied().filter(|kw| normalized.contains(kw)).collect();
        if hits.is_empty() {
            continue;
        }
        families |= family.mask;
        keywords.extend(hits);
        operation.get_or_insert(family.operation);
    }

    Classification { operation: operation.unwrap_or_default(), families, keywords }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_beats_difference() {
        let c = classify("twice seven minus three");
        assert_eq!(c.operation, Operation::Product);
        assert_eq!(c.families, FamilyMask::PRODUCT | FamilyMask::DIFFERENCE);
        assert_eq!(c.keywords, vec!["twice", "minus"]);
    }

    #[test]
    fn defaults_to_sum() {
        let c = classify("five and three");
        assert_eq!(c.operation, Operation::Sum);
        assert!(c.defaulted());
        assert!(c.keywords.is_empty());
    }
}
