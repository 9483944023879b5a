//! Rendering of the Names and Directive blocks.
//!
//! Pure string templates over already-sequenced passengers. Each line ends
//! with [`TERMINATOR`]; lines are joined with `\n` and a block with no lines
//! is the empty string.
//!
//! ```text
//! names       -1SMITH/JOHN*20MAY93§        -iBERG/MARIA*20MAY23§
//! documents   3DOCS/DB/20MAY93/M/SMITH/JOHN-1.1§
//! children    3CHLD/04MAR17-2.1§
//! infants     3DOCS/DB/20MAY23/FI/BERG/MARIA-1.1§
//!             3INFT/BERG/MARIA/20MAY23-1.1§
//!             3BSCT-1.1§
//! contacts    PE¥JOHN@EXAMPLE.COM¥§
//!             3CTCE/JOHN//EXAMPLE.COM-1.1§
//! ```

use crate::{Category, ParsedPassenger};

pub const TERMINATOR: char = '§';

pub fn names_block(passengers: &[ParsedPassenger]) -> String {
    let seated = passengers.iter().filter_map(|p| Some((p.assignment.seat()?, p)));
    let infants = passengers.iter().filter(|p| p.category.is_infant());

    let mut lines: Vec<String> = seated
        .map(|(seat, p)| format!("-{seat}{}/{}*{}{TERMINATOR}", p.last_name, p.first_name, p.birth_code))
        .collect();
    lines.extend(infants.map(|p| format!("-i{}/{}*{}{TERMINATOR}", p.last_name, p.first_name, p.birth_code)));

    lines.join("\n")
}

pub fn directive_block(passengers: &[ParsedPassenger], child_directives: bool) -> String {
    let seated: Vec<(u32, &ParsedPassenger)> =
        passengers.iter().filter_map(|p| Some((p.assignment.seat()?, p))).collect();
    let mut lines = Vec::new();

    for (seat, p) in &seated {
        lines.push(format!(
            "3DOCS/DB/{}/{}/{}/{}-{seat}.1{TERMINATOR}",
            p.birth_code,
            p.gender.tag(),
            p.last_name,
            p.first_name
        ));
    }

    if child_directives {
        for (seat, p) in seated.iter().filter(|(_, p)| p.category == Category::Child) {
            lines.push(format!("3CHLD/{}-{seat}.1{TERMINATOR}", p.birth_code));
        }
    }

    for (guardian, p) in passengers.iter().filter_map(|p| Some((p.assignment.guardian()?, p))) {
        lines.push(format!(
            "3DOCS/DB/{}/{}/{}/{}-{guardian}.1{TERMINATOR}",
            p.birth_code,
            p.gender.infant_tag(),
            p.last_name,
            p.first_name
        ));
        lines.push(format!("3INFT/{}/{}/{}-{guardian}.1{TERMINATOR}", p.last_name, p.first_name, p.birth_code));
        lines.push(format!("3BSCT-{guardian}.1{TERMINATOR}"));
    }

    for (seat, email) in seated.iter().filter_map(|(seat, p)| Some((seat, p.email.as_deref()?.to_uppercase()))) {
        lines.push(format!("PE¥{email}¥{TERMINATOR}"));
        lines.push(format!("3CTCE/{}-{seat}.1{TERMINATOR}", email.replace('@', "//")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Assignment, Gender};
    use chrono::NaiveDate;

    fn pax(first: &str, last: &str, code: &str, gender: Gender, category: Category, assignment: Assignment) -> ParsedPassenger {
        ParsedPassenger {
            first_name: first.to_string(),
            last_name: last.to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            birth_code: code.to_string(),
            email: None,
            gender,
            category,
            age: 0,
            assignment,
        }
    }

    fn family() -> Vec<ParsedPassenger> {
        let mut john = pax("JOHN", "SMITH", "20MAY93", Gender::Male, Category::Adult, Assignment::Seat(1));
        john.email = Some("john@example.com".to_string());
        vec![
            john,
            pax("MARIA", "VAN DER BERG", "20MAY23", Gender::Female, Category::LapInfant, Assignment::Lap {
                guardian: 2,
            }),
            pax("ANNA", "SMITH", "01JAN90", Gender::Female, Category::Adult, Assignment::Seat(2)),
            pax("TIM", "SMITH", "04MAR17", Gender::Male, Category::Child, Assignment::Seat(3)),
        ]
    }

    #[test]
    fn names_list_seats_then_infants() {
        let expected = [
            "-1SMITH/JOHN*20MAY93§",
            "-2SMITH/ANNA*01JAN90§",
            "-3SMITH/TIM*04MAR17§",
            "-iVAN DER BERG/MARIA*20MAY23§",
        ]
        .join("\n");
        assert_eq!(names_block(&family()), expected);
    }

    #[test]
    fn directives_follow_fixed_section_order() {
        let expected = [
            "3DOCS/DB/20MAY93/M/SMITH/JOHN-1.1§",
            "3DOCS/DB/01JAN90/F/SMITH/ANNA-2.1§",
            "3DOCS/DB/04MAR17/M/SMITH/TIM-3.1§",
            "3CHLD/04MAR17-3.1§",
            "3DOCS/DB/20MAY23/FI/VAN DER BERG/MARIA-2.1§",
            "3INFT/VAN DER BERG/MARIA/20MAY23-2.1§",
            "3BSCT-2.1§",
            "PE¥JOHN@EXAMPLE.COM¥§",
            "3CTCE/JOHN//EXAMPLE.COM-1.1§",
        ]
        .join("\n");
        assert_eq!(directive_block(&family(), true), expected);
    }

    #[test]
    fn child_lines_are_optional() {
        let block = directive_block(&family(), false);
        assert!(!block.contains("3CHLD"));
        assert_eq!(block.lines().count(), 8);
    }

    #[test]
    fn no_passengers_renders_empty_blocks() {
        assert_eq!(names_block(&[]), "");
        assert_eq!(directive_block(&[], true), "");
    }
}
