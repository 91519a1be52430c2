use crate::engine::Pipeline;
use crate::{FamilyMask, Operation, Options};

#[test]
fn operation_examples_matching() {
    // Array of (expected operation, challenge)
    let cases: Vec<(Operation, &str)> = vec![
        (Operation::Sum, "five and three"),
        (Operation::Sum, "what is the total"),
        (Operation::Product, "what is the product"),
        (Operation::Product, "mu-lti-pl-ied by four"),
        (Operation::Product, "DoUbLeD"),
        (Operation::Product, "it is twice as fast"),
        (Operation::Product, "three times four"),
        (Operation::Product, "a factor of two"),
        (Operation::Quotient, "divided evenly"),
        (Operation::Quotient, "split between"),
        (Operation::Quotient, "meters per second"),
        (Operation::Quotient, "the ratio"),
        (Operation::Difference, "ten minus two"),
        (Operation::Difference, "subtract it"),
        (Operation::Difference, "three less"),
        (Operation::Difference, "how many remain"),
        (Operation::Difference, "the difference"),
        // Precedence: product > quotient > difference.
        (Operation::Product, "twice seven minus three"),
        (Operation::Product, "times per hour"),
        (Operation::Quotient, "split minus"),
        // Substring matching: "per" hides inside other words.
        (Operation::Quotient, "the upper claw"),
    ];

    let opts = Options::default();

    for (expected, input) in cases {
        let run = Pipeline::new(input, &opts).run();
        assert_eq!(
            run.classification.operation, expected,
            "wrong operation for input '{}' (normalized: '{}')",
            input, run.normalized
        );
    }
}

#[test]
fn every_matching_family_is_reported() {
    let opts = Options::default();
    let run = Pipeline::new("split the product, less three", &opts).run();

    assert_eq!(run.classification.operation, Operation::Product);
    assert_eq!(run.classification.families, FamilyMask::all());
    assert_eq!(run.classification.keywords, vec!["product", "split", "less"]);
}
