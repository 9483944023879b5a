use paxline::{Assignment, GenerateDetails, ParsedPassenger, RawPassenger, RowOutcome};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
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

pub fn print_run(rows: &[RawPassenger], details: &GenerateDetails, color: bool) {
    let palette = ansi::Palette::new(color);

    eprintln!("\n{}", palette.paint("━━━ Reference ━━━", ansi::GRAY));
    match details.reference {
        Some(date) => eprintln!("  {}", palette.bold(palette.paint(date.to_string(), ansi::GREEN))),
        None => {
            eprintln!("  {}", palette.paint("✗ not recognised", ansi::RED));
            eprintln!("{}", palette.dim("  Output is empty until the reference date parses."));
            return;
        }
    }

    eprintln!("\n{}", palette.paint("━━━ Rows ━━━", ansi::GRAY));
    let mut fired = details.fired_rules.iter();
    for (idx, (raw, outcome)) in rows.iter().zip(&details.rows).enumerate() {
        let label = palette.paint(format!("[{}]", idx + 1), ansi::GRAY);
        match outcome {
            RowOutcome::Blank => eprintln!("  {} {}", label, palette.dim("blank")),
            RowOutcome::Dropped(reason) => {
                eprintln!("  {} {} {}", label, palette.paint("✗ dropped:", ansi::RED), reason);
                eprintln!("      {}", palette.dim(&raw.text));
            }
            RowOutcome::Parsed(passenger) => {
                let rule = fired.next().map(String::as_str).unwrap_or("?");
                eprintln!("  {} {}", label, fmt_passenger(passenger, &palette));
                eprintln!("      {} {}", palette.dim("rule:"), palette.paint(rule, ansi::CYAN));
            }
        }
    }
    eprintln!();
}

fn fmt_passenger(p: &ParsedPassenger, palette: &ansi::Palette) -> String {
    let slot = match p.assignment {
        Assignment::Seat(n) => format!("seat {n}"),
        Assignment::Lap { guardian } => format!("lap of {guardian}"),
        Assignment::Pending => "unassigned".to_string(),
    };
    format!(
        "{} {} {} {}",
        palette.bold(palette.paint(format!("{}/{}", p.last_name, p.first_name), ansi::GREEN)),
        palette.paint(&p.birth_code, ansi::YELLOW),
        palette.dim(format!("│ {:?}, age {}", p.category, p.age)),
        palette.paint(slot, ansi::CYAN),
    )
}
