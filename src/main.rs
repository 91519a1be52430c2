mod debug_report;

use mathgate::{Options, solve_verbose_with};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MATHGATE_LOG";
const DEFAULT_LOG_FILTER: &str = "mathgate=info";

fn main() {
    let config = match parse_args(std::env::args().skip(1), read_stdin_input) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if !config.quiet {
        init_tracing();
    }

    let res = solve_verbose_with(&config.input, &config.options);
    if config.explain {
        debug_report::print_run(&res, config.color);
    } else {
        println!("{}", res.solution.answer);
    }
}

/// Diagnostics go to stderr so stdout carries nothing but the answer.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).without_time().init();
}

struct CliConfig {
    input: String,
    options: Options,
    explain: bool,
    quiet: bool,
    color: bool,
}

/// Anything that is not a known flag starts the challenge text, even when it
/// begins with `-`. An empty challenge is still solved (to `0.00`).
fn parse_args<I, R>(args: I, read_stdin: R) -> Result<CliConfig, String>
where
    I: IntoIterator<Item = String>,
    R: FnOnce() -> Result<String, String>,
{
    let mut input: Option<String> = None;
    let mut options = Options::default();
    let mut explain = false;
    let mut quiet = false;
    let mut color = io::stdout().is_terminal();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("mathgate {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--explain" => explain = true,
            "--no-repair" => options.repair_number_words = false,
            "-q" | "--quiet" => quiet = true,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                set_input(&mut input, value.to_string())?;
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin()?,
    };

    Ok(CliConfig { input, options, explain, quiet, color })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "mathgate {version}

Solves obfuscated arithmetic verification challenges.

Usage:
  mathgate [OPTIONS] [--] <challenge...>
  mathgate [OPTIONS] --input <text>

Options:
  -i, --input <text>         Challenge text. If omitted, reads remaining args
                             or stdin when no args are provided. The first
                             argument that is not an option starts the
                             challenge, even if it begins with '-'.
  --explain                  Print a stage-by-stage report instead of only the answer.
  --no-repair                Skip the targeted number-word repair pass.
  -q, --quiet                Do not print diagnostics on stderr.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                Log filter for diagnostics (default: {default_filter}).

Output:
  The answer, always with two decimals (\"0.00\" when nothing can be computed).

Exit codes:
  0  Success.
  2  Invalid arguments (missing --input value, input given twice,
     unreadable stdin).
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
        default_filter = DEFAULT_LOG_FILTER,
    )
}
