use crate::error::Error;
use chrono::NaiveDate;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Tag used on adult and child document lines.
    pub fn tag(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Tag used on an infant's document line.
    pub fn infant_tag(self) -> &'static str {
        match self {
            Gender::Male => "MI",
            Gender::Female => "FI",
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" | "MALE" => Ok(Gender::Male),
            "F" | "FEMALE" => Ok(Gender::Female),
            _ => Err(Error::InvalidTag { kind: "gender", value: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Adult,
    Child,
    LapInfant,
}

impl Category {
    /// Age thresholds: under 2 rides on a lap, under 12 is a child.
    pub fn from_age(age: i32) -> Self {
        if age < 2 {
            Category::LapInfant
        } else if age < 12 {
            Category::Child
        } else {
            Category::Adult
        }
    }

    pub fn is_infant(self) -> bool {
        self == Category::LapInfant
    }
}

/// The caller's category choice for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryHint {
    #[default]
    Infer,
    Fixed(Category),
}

impl CategoryHint {
    /// An explicit category always wins; `Infer` falls back to age thresholds.
    pub fn resolve(self, age: i32) -> Category {
        match self {
            CategoryHint::Fixed(category) => category,
            CategoryHint::Infer => Category::from_age(age),
        }
    }
}

impl FromStr for CategoryHint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" | "infer" => Ok(CategoryHint::Infer),
            "adult" | "adt" => Ok(CategoryHint::Fixed(Category::Adult)),
            "child" | "chd" | "cnn" => Ok(CategoryHint::Fixed(Category::Child)),
            "infant" | "inf" | "lap" | "lap-infant" => Ok(CategoryHint::Fixed(Category::LapInfant)),
            _ => Err(Error::InvalidTag { kind: "category", value: s.to_string() }),
        }
    }
}

/// Field order for all-numeric dates such as `05/06/2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateOrder {
    #[default]
    DayFirst,
    MonthFirst,
}

impl DateOrder {
    /// Map two numeric fields, in written order, to `(month, day)`.
    pub fn month_day(self, first: u32, second: u32) -> (u32, u32) {
        match self {
            DateOrder::DayFirst => (second, first),
            DateOrder::MonthFirst => (first, second),
        }
    }
}

impl FromStr for DateOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dmy" | "day-first" | "day" => Ok(DateOrder::DayFirst),
            "mdy" | "month-first" | "month" => Ok(DateOrder::MonthFirst),
            _ => Err(Error::InvalidTag { kind: "date order", value: s.to_string() }),
        }
    }
}

/// Where the last name sits in a name with no `=` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameOrder {
    #[default]
    LastNameLast,
    LastNameFirst,
}

impl FromStr for NameOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-name-last" | "first-last" | "last" => Ok(NameOrder::LastNameLast),
            "last-name-first" | "last-first" | "first" => Ok(NameOrder::LastNameFirst),
            _ => Err(Error::InvalidTag { kind: "name order", value: s.to_string() }),
        }
    }
}

/// One caller-supplied row: free text plus the two tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPassenger {
    pub text: String,
    pub gender: Gender,
    pub category: CategoryHint,
}

impl RawPassenger {
    pub fn new(text: impl Into<String>, gender: Gender, category: CategoryHint) -> Self {
        Self { text: text.into(), gender, category }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Parses `text|gender|category`. Gender defaults to `M`, category to `auto`.
impl FromStr for RawPassenger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.splitn(3, '|');
        let text = fields.next().unwrap_or_default().trim().to_string();
        let gender = match fields.next().map(str::trim) {
            Some(tag) if !tag.is_empty() => tag.parse()?,
            _ => Gender::default(),
        };
        let category = match fields.next() {
            Some(tag) => tag.parse()?,
            None => CategoryHint::default(),
        };
        Ok(Self { text, gender, category })
    }
}

/// Sequencing result for a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Assignment {
    /// Not yet sequenced.
    #[default]
    Pending,
    /// A non-infant's own sequence number.
    Seat(u32),
    /// An infant riding with the passenger holding this sequence number.
    Lap { guardian: u32 },
}

impl Assignment {
    pub fn seat(self) -> Option<u32> {
        match self {
            Assignment::Seat(n) => Some(n),
            _ => None,
        }
    }

    pub fn guardian(self) -> Option<u32> {
        match self {
            Assignment::Lap { guardian } => Some(guardian),
            _ => None,
        }
    }
}

/// A fully resolved row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPassenger {
    /// Upper-cased given name(s).
    pub first_name: String,
    /// Upper-cased surname.
    pub last_name: String,
    pub birth_date: NaiveDate,
    /// `DDMMMYY` rendering of `birth_date`.
    pub birth_code: String,
    pub email: Option<String>,
    pub gender: Gender,
    pub category: Category,
    /// Whole years on the reference date.
    pub age: i32,
    pub assignment: Assignment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_thresholds() {
        let cases = vec![
            (Category::LapInfant, -1),
            (Category::LapInfant, 0),
            (Category::LapInfant, 1),
            (Category::Child, 2),
            (Category::Child, 11),
            (Category::Adult, 12),
            (Category::Adult, 80),
        ];
        for (expected, age) in cases {
            assert_eq!(CategoryHint::Infer.resolve(age), expected, "age {age}");
        }
    }

    #[test]
    fn explicit_category_overrides_age() {
        assert_eq!(CategoryHint::Fixed(Category::Adult).resolve(1), Category::Adult);
        assert_eq!(CategoryHint::Fixed(Category::LapInfant).resolve(40), Category::LapInfant);
    }

    #[test]
    fn tags_parse_case_insensitively() {
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("CHD".parse::<CategoryHint>().unwrap(), CategoryHint::Fixed(Category::Child));
        assert_eq!("auto".parse::<CategoryHint>().unwrap(), CategoryHint::Infer);
        assert_eq!("MDY".parse::<DateOrder>().unwrap(), DateOrder::MonthFirst);
        assert!(matches!("x".parse::<Gender>(), Err(Error::InvalidTag { kind: "gender", .. })));
    }

    #[test]
    fn raw_row_from_pipe_separated_line() {
        let row: RawPassenger = "John Smith 20MAY93 | F | child".parse().unwrap();
        assert_eq!(row.text, "John Smith 20MAY93");
        assert_eq!(row.gender, Gender::Female);
        assert_eq!(row.category, CategoryHint::Fixed(Category::Child));

        let row: RawPassenger = "John Smith 20MAY93".parse().unwrap();
        assert_eq!(row.gender, Gender::Male);
        assert_eq!(row.category, CategoryHint::Infer);

        assert!("John|Q".parse::<RawPassenger>().is_err());
    }

    #[test]
    fn numeric_order_maps_fields() {
        assert_eq!(DateOrder::DayFirst.month_day(5, 6), (6, 5));
        assert_eq!(DateOrder::MonthFirst.month_day(5, 6), (5, 6));
    }
}
