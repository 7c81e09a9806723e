//! Picks the weekly menu that applies to a given day.

use std::cmp::Reverse;

use url::Url;

use crate::parse::{FallbackLink, Listing, MenuEntry};
use crate::reference_date::ReferenceDate;

/// Title shown when the chosen link carries no text of its own.
const DEFAULT_TITLE: &str = "Jedilnik";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Entry(&'a MenuEntry),
    Fallback(&'a FallbackLink),
}

impl<'a> Selection<'a> {
    pub const fn url(&self) -> &'a Url {
        match *self {
            Self::Entry(entry) => entry.url(),
            Self::Fallback(link) => link.url(),
        }
    }

    pub fn title(&self) -> &'a str {
        let text = match *self {
            Self::Entry(entry) => entry.text(),
            Self::Fallback(link) => link.text(),
        };
        if text.is_empty() {
            DEFAULT_TITLE
        } else {
            text
        }
    }
}

/// Chooses one menu for `today`, trying in order:
///
/// 1. the first entry whose range contains today
/// 2. on Fridays, the first entry ending exactly today
/// 3. of the entries not yet over, the one starting latest
/// 4. of all entries, the one starting latest
/// 5. the first undated link
///
/// With whole-date comparison rule 1 already catches everything rule 2 would;
/// rule 2 stays its own step so a change to rule 1 cannot move Friday lookups.
pub fn select_menu<'a>(listing: &'a Listing, today: &ReferenceDate) -> Option<Selection<'a>> {
    let entries = listing.entries();
    let date = today.date();

    if let Some(entry) = entries.iter().find(|entry| entry.covers(date)) {
        return Some(Selection::Entry(entry));
    }

    if today.is_last_weekday_of_week() {
        if let Some(entry) = entries.iter().find(|entry| entry.end() == date) {
            return Some(Selection::Entry(entry));
        }
    }

    latest_start(entries.iter().filter(|entry| entry.end() >= date))
        .or_else(|| latest_start(entries.iter()))
        .map(Selection::Entry)
        .or_else(|| listing.fallbacks().first().map(Selection::Fallback))
}

/// Ties go to the earlier entry in document order.
fn latest_start<'a>(candidates: impl Iterator<Item = &'a MenuEntry>) -> Option<&'a MenuEntry> {
    candidates.min_by_key(|entry| Reverse(entry.start()))
}
