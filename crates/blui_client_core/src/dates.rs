//! Calendar helpers and serde glue for `YYYY-MM-DD` dates.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serialize NaiveDate as "YYYY-MM-DD". Used with #[serde(with = "crate::dates")].
pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    date.format(DATE_FORMAT).to_string().serialize(serializer)
}

/// Deserialize NaiveDate from "YYYY-MM-DD". A full timestamp
/// ("2025-01-05T00:00:00Z") is accepted and truncated to its date.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date(&s).map_err(serde::de::Error::custom)
}

pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    let s = s.trim();
    match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(e) => match s.get(..10) {
            Some(prefix) if s.len() > 10 && s.as_bytes()[10] == b'T' => {
                NaiveDate::parse_from_str(prefix, DATE_FORMAT)
            }
            _ => Err(e),
        },
    }
}

/// First and last calendar day of `month` (1-12) in `year`.
pub fn month_bounds(month: u32, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = (28..=31)
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))?;
    Some((first, last))
}

pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    month_bounds(month, year).map(|(_, last)| last.day())
}

/// A calendar month, as picked in the month/year selector. Always a month
/// chrono can represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthYear {
    month: u32,
    year: i32,
}

impl MonthYear {
    pub fn new(month: u32, year: i32) -> Option<Self> {
        month_bounds(month, year).map(|_| Self { month, year })
    }

    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `None` past the earliest month chrono supports.
    pub fn previous(&self) -> Option<Self> {
        if self.month == 1 {
            Self::new(12, self.year.checked_sub(1)?)
        } else {
            Self::new(self.month - 1, self.year)
        }
    }

    /// `None` past the latest month chrono supports.
    pub fn next(&self) -> Option<Self> {
        if self.month == 12 {
            Self::new(1, self.year.checked_add(1)?)
        } else {
            Self::new(self.month + 1, self.year)
        }
    }

    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        month_bounds(self.month, self.year)
    }
}

impl std::fmt::Display for MonthYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
