use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};

/// A `D.M.–D.M. YYYY` range as it appears in a menu title, e.g. `Jedilnik 12.1.–16.1. 2026`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeMatch<'a> {
    /// The matched substring, exactly as written in the title.
    pub text: &'a str,
    pub start: (u32, u32),
    pub end: (u32, u32),
    pub year: i32,
}

fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([0-9]{1,2})\.\s*([0-9]{1,2})\.\s*–\s*([0-9]{1,2})\.\s*([0-9]{1,2})\.\s*([0-9]{4})")
            .expect("regex should be valid")
    })
}

impl<'a> DateRangeMatch<'a> {
    /// Finds the first date range in `text`. Never fails on unrelated input.
    pub fn find(text: &'a str) -> Option<Self> {
        let caps = pattern().captures(text)?;
        let whole = caps.get(0)?;
        let num = |caps: &Captures<'_>, i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
        Some(Self {
            text: whole.as_str(),
            start: (num(&caps, 1)?, num(&caps, 2)?),
            end: (num(&caps, 3)?, num(&caps, 4)?),
            year: caps.get(5)?.as_str().parse().ok()?,
        })
    }

    /// Resolves the day/month pairs into calendar dates.
    ///
    /// The shared year belongs to the end date; a start that would fall after
    /// the end is a week spanning New Year and is moved to the previous year.
    /// Returns `None` if either end names a date that does not exist.
    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        let (end_day, end_month) = self.end;
        let end = NaiveDate::from_ymd_opt(self.year, end_month, end_day)?;
        let (start_day, start_month) = self.start;
        let start = NaiveDate::from_ymd_opt(self.year, start_month, start_day)?;
        if start <= end {
            Some((start, end))
        } else {
            let start = NaiveDate::from_ymd_opt(end.year() - 1, start_month, start_day)?;
            Some((start, end))
        }
    }
}
