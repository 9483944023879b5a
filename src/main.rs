mod debug_report;

use paxline::{Context, DateOrder, MAX_ROWS, NameOrder, Options, RawPassenger, generate_verbose_with};
use std::io::{self, IsTerminal, Read};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PAXLINE_LOG";

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context::new(config.reference.clone());
    let res = generate_verbose_with(&config.rows, &ctx, &config.options);

    if res.details.reference.is_none() {
        warn!(reference = config.reference.as_str(), "reference date not recognised; nothing generated");
    }

    println!("{}", res.output);
    if config.verbose {
        debug_report::print_run(&config.rows, &res.details, config.color);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

struct CliConfig {
    rows: Vec<RawPassenger>,
    reference: String,
    options: Options,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input_path: Option<String> = None;
    let mut reference: Option<String> = None;
    let mut options = Options::default();
    let mut verbose = false;
    let mut color = io::stderr().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("paxline {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--verbose" | "-v" => verbose = true,
            "--month-first" => options.date_order = DateOrder::MonthFirst,
            "--last-name-first" => options.name_order = NameOrder::LastNameFirst,
            "--child-directives" => options.child_directives = true,
            "--reference" | "-r" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference = Some(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                input_path = Some(value);
            }
            _ if arg.starts_with("--reference=") => {
                reference = Some(arg.trim_start_matches("--reference=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                input_path = Some(arg.trim_start_matches("--input=").to_string());
            }
            _ => {
                return Err(format!("error: unknown argument '{arg}'\n\n{}", help_text()));
            }
        }
    }

    let reference = reference.ok_or_else(|| format!("error: --reference is required\n\n{}", help_text()))?;

    let text = match input_path {
        Some(path) => std::fs::read_to_string(&path).map_err(|err| format!("error: failed to read {path}: {err}"))?,
        None => read_stdin_input()?,
    };

    let rows = parse_rows(&text)?;
    Ok(CliConfig { rows, reference, options, verbose, color })
}

fn parse_rows(text: &str) -> Result<Vec<RawPassenger>, String> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() > MAX_ROWS {
        warn!(rows = lines.len(), max = MAX_ROWS, "too many rows; extra rows ignored");
    }

    lines
        .iter()
        .take(MAX_ROWS)
        .enumerate()
        .map(|(idx, line)| line.parse().map_err(|err| format!("error: line {}: {err}", idx + 1)))
        .collect()
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
        "paxline {version}

Turns free-text passenger rows into name and directive entries.

Usage:
  paxline --reference <date> [OPTIONS] < rows.txt
  paxline --reference <date> --input <file> [OPTIONS]

Each row is `text|gender|category`; gender is M or F (default M), category
is adult, child, infant or auto (default auto). At most {max_rows} rows are read.

Options:
  -r, --reference <date>     Return-flight date that ages are computed against.
  -i, --input <file>         Read rows from a file instead of stdin.
  --month-first              Read numeric dates as month/day/year.
  --last-name-first          Without '=', the first word is the last name.
  --child-directives         Emit a child directive for each child.
  -v, --verbose              Print per-row diagnostics to stderr.
  --color                    Force ANSI color in diagnostics.
  --no-color                 Disable ANSI color in diagnostics.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                Log filter (default: warn).

Exit codes:
  0  Success.
  2  Invalid arguments or unreadable input.
",
        version = env!("CARGO_PKG_VERSION"),
        max_rows = MAX_ROWS,
        log_env = LOG_ENV,
    )
}
