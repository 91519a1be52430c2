use mathgate::{AnswerSource, SolutionVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &SolutionVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let solution = &res.solution;
    let details = &res.details;

    println!("\n{}", palette.bold(palette.paint(format!("⚙  Solving: \"{}\"", solution.challenge), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Normalized ━━━", ansi::GRAY));
    if details.normalized.is_empty() {
        println!("{}", palette.dim("  (empty)"));
    } else {
        println!("  {}", details.normalized);
    }

    println!("\n{}", palette.paint("━━━ Operands ━━━", ansi::GRAY));
    print_operands(res, &palette);

    println!("\n{}", palette.paint("━━━ Operation ━━━", ansi::GRAY));
    let origin = if details.classification.defaulted() {
        palette.dim("(default, no keyword matched)")
    } else {
        palette.dim(format!("keywords: {}", details.classification.keywords.join(", ")))
    };
    println!("  {} {}", palette.paint(solution.operation.name(), ansi::BLUE), origin);

    println!("\n{}", palette.paint("━━━ Answer ━━━", ansi::GRAY));
    let source = match solution.source {
        AnswerSource::Engine => "engine",
        AnswerSource::Fallback => "fallback solver",
    };
    println!("  {} {}", palette.bold(palette.paint(&solution.answer, ansi::GREEN)), palette.dim(format!("from {source}")));
    if let Some(degradation) = &solution.degradation {
        println!("  {} {}", palette.paint("degraded:", ansi::YELLOW), degradation);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let stages = details
        .stages
        .iter()
        .map(|s| format!("{}: {}", s.stage, palette.dim(format!("{:?}", s.duration))))
        .collect::<Vec<_>>()
        .join("  │  ");
    println!("  Total: {}  │  {}", palette.paint(format!("{:?}", details.total), ansi::GREEN), stages);
    println!();
}

fn print_operands(res: &SolutionVerbose, palette: &ansi::Palette) {
    let operands = &res.solution.operands;
    if operands.is_empty() {
        println!("{}", palette.dim("  No number words found"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • Number words are split by spaces, which normalization keeps as word breaks");
        println!("  • Letters were dropped rather than repeated");
        println!("  • Numbers are written as digits, which are not read");
        println!("\n{}", palette.dim("  Tip: set MATHGATE_LOG=mathgate=debug to trace each stage"));
        return;
    }

    for (idx, op) in operands.iter().enumerate() {
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(op.value.to_string(), ansi::GREEN)),
            palette.dim("│"),
            palette.paint(op.words.join(" "), ansi::CYAN),
            palette.paint(format!("tokens {}..{}", op.range.start, op.range.end), ansi::YELLOW),
        );
    }
}
