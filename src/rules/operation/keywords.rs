use crate::Operation;

bitflags::bitflags! {
    /// Keyword families found in a normalized challenge.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FamilyMask: u8 {
        const PRODUCT    = 1 << 0;
        const QUOTIENT   = 1 << 1;
        const DIFFERENCE = 1 << 2;
    }
}

/// A set of keyword stems that select one operation.
///
/// Keywords are matched as substrings, so stems like `"multipl"` cover
/// "multiply", "multiplied" and "multiplication".
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeywordFamily {
    pub operation: Operation,
    pub mask: FamilyMask,
    pub keywords: &'static [&'static str],
}

/// Families in precedence order: the first one that matches wins.
pub(crate) static FAMILIES: [KeywordFamily; 3] = [
    family! {
        operation: Operation::Product,
        mask: FamilyMask::PRODUCT,
        keywords: ["product", "factor", "multipl", "doubl", "twice", "times"],
    },
    family! {
        operation: Operation::Quotient,
        mask: FamilyMask::QUOTIENT,
        keywords: ["divid", "split", "per", "ratio"],
    },
    family! {
        operation: Operation::Difference,
        mask: FamilyMask::DIFFERENCE,
        keywords: ["minus", "subtract", "less", "remain", "differ"],
    },
];
