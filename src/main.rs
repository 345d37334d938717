use std::{fs, process::ExitCode};

use calcline::{evaluate, parse};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcline evaluates arithmetic expressions such as `2.35e-3 + 1` or
/// `2 ** 3 * 4`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcline to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the fully parenthesized expression tree instead of its value.
    #[arg(short, long)]
    tree: bool,

    contents: String,
}

fn run_line(line: &str, tree: bool) -> Result<String, calcline::error::Error> {
    if tree {
        Ok(parse(line)?.to_string())
    } else {
        Ok(evaluate(line)?.to_string())
    }
}

/// Drops one trailing `\n` or `\r\n`, as left behind by `read_line` or a
/// shell here-string.
fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    if !args.file {
        return match run_line(strip_line_terminator(&args.contents), args.tree) {
            Ok(out) => {
                println!("{out}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let Ok(script) = fs::read_to_string(&args.contents) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.contents);
        return ExitCode::FAILURE;
    };

    let mut failed = false;
    for (number, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match run_line(line, args.tree) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("line {}: {e}", number + 1);
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
