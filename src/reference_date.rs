use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::Error;

/// All "today" reasoning happens in the school's timezone, never the host's.
pub const TIMEZONE: Tz = chrono_tz::Europe::Ljubljana;

/// Row labels used by the weekly menu table, Sunday first.
const DAY_CODES: [&str; 7] = ["NED", "PON", "TOR", "SRE", "ČET", "PET", "SOB"];
const DAY_NAMES: [&str; 7] = [
    "nedelja",
    "ponedeljek",
    "torek",
    "sreda",
    "četrtek",
    "petek",
    "sobota",
];

/// The single notion of "today" shared by every stage of one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDate {
    date: NaiveDate,
}

impl ReferenceDate {
    /// Today's calendar date in [`TIMEZONE`].
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::from_date(instant.with_timezone(&TIMEZONE).date_naive())
    }

    pub const fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Friday closes the school week.
    pub fn is_last_weekday_of_week(&self) -> bool {
        self.weekday() == Weekday::Fri
    }

    /// Table row label, e.g. `PET`.
    pub fn day_code(&self) -> &'static str {
        DAY_CODES[self.weekday().num_days_from_sunday() as usize]
    }

    /// e.g. `petek`
    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[self.weekday().num_days_from_sunday() as usize]
    }

    /// `DD.MM.YYYY`
    pub fn full_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }

    /// `DD.MM`
    pub fn short_date(&self) -> String {
        self.date.format("%d.%m").to_string()
    }
}

/// Parses `YYYY-MM-DD`, for looking up a day other than today.
impl FromStr for ReferenceDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| Error::InvalidDate(s.to_owned()))
    }
}
