/// Compile a regular expression once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a keyword family for the operation classifier.
///
/// ```ignore
/// family! {
///     operation: Operation::Product,
///     mask: FamilyMask::PRODUCT,
///     keywords: ["product", "times"],
/// }
/// ```
#[macro_export]
macro_rules! family {
    (
        operation: $op:expr,
        mask: $mask:expr,
        keywords: [ $($kw:literal),+ $(,)? ]
        $(,)?
    ) => {
        $crate::rules::operation::keywords::KeywordFamily {
            operation: $op,
            mask: $mask,
            keywords: &[ $($kw),+ ],
        }
    };
}
