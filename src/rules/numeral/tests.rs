use crate::engine::Pipeline;
use crate::{Options, Operation};

#[test]
fn operand_examples_matching() {
    // Array of (expected operands, challenge)
    let cases: Vec<(Vec<f64>, &str)> = vec![
        (vec![], ""),
        (vec![], "what is 5 plus 3"),
        (vec![], "no numbers at all here"),
        (vec![0.0], "zero"),
        (vec![7.0], "seven"),
        (vec![12.0], "TWELVE"),
        (vec![19.0], "nineteen"),
        (vec![23.0], "twenty three"),
        (vec![23.0], "TwEnTy ThReE"),
        (vec![30.0], "thirrrty"),
        (vec![30.0], "thirrty"),
        (vec![30.0], "t-h-i-r-t-y"),
        (vec![7.0], "sevvven"),
        (vec![7.0], "sevven"),
        (vec![3.0], "threeee"),
        (vec![13.0], "thirteeeen"),
        (vec![70.0], "seventy"),
        (vec![45.0], "fo^r^ty fi~ve"),
        (vec![45.0], "FoOrRtY  fIiVe"),
        (vec![100.0], "hundred"),
        (vec![5.0, 3.0], "five and three"),
        // Punctuation is gone after normalization, so adjacent words still merge.
        (vec![8.0], "five, three"),
        (vec![32.0, 14.0], "A lobster has thirty two claws and fourteen legs"),
        (vec![35.0, 12.0], "ThIrTy FiVe} ... ^tWeLvE?"),
        (vec![25.0, 7.0], "tw/en/ty fi|ve mi+nus se*v*en"),
        (vec![23.0, 4.0], "twenty three four"),
    ];

    let opts = Options::default();

    for (expected, input) in cases {
        let run = Pipeline::new(input, &opts).run();
        let values: Vec<f64> = run.operands.iter().map(|op| op.value).collect();

        assert_eq!(
            values, expected,
            "unexpected operands for input '{}' (normalized: '{}')",
            input, run.normalized
        );
    }
}

#[test]
fn answer_examples_matching() {
    // Array of (expected answer, operation, challenge)
    let cases: Vec<(&str, Operation, &str)> = vec![
        ("8.00", Operation::Sum, "five and three"),
        ("8.00", Operation::Sum, "FiVe PlUs ThReE"),
        ("48.00", Operation::Product, "what is the product of twelve and four"),
        ("0.00", Operation::Quotient, "divide ten by zero"),
        ("14.00", Operation::Product, "double seven"),
        ("2.50", Operation::Quotient, "ten split into four"),
        ("-7.00", Operation::Difference, "three minus ten"),
        ("18.00", Operation::Difference, "twenty five subtract seven"),
        ("0.00", Operation::Sum, "nothing useful"),
        ("0.00", Operation::Product, "twice nothing"),
        ("3.33", Operation::Quotient, "ten divided by three"),
        ("150.00", Operation::Product, "twice thirty minus five"),
        ("23.00", Operation::Difference, "how many remain from thirty after losing seven"),
        ("38.00", Operation::Sum, "A lo-bst-er sw^ims at tw/en/ty thr|ee me~ters and g^ains fiif-teen, what is the total?"),
        ("525.00", Operation::Product, "Th-e cl@w fO^rCe iS tHiRrRtY fIvE nEwToNs tImEs fIfTeEn"),
        ("25.00", Operation::Sum, "-TwEnTy pLuS fIvE"),
        ("0.00", Operation::Sum, "a teen ager"),
        ("0.00", Operation::Sum, "five+three"),
    ];

    let opts = Options::default();

    for (expected, operation, input) in cases {
        let run = Pipeline::new(input, &opts).run();

        assert_eq!(run.classification.operation, operation, "wrong operation for input '{}'", input);
        assert_eq!(run.answer, expected, "wrong answer for input '{}' (normalized: '{}')", input, run.normalized);
    }
}
