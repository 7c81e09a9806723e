use chrono::NaiveDate;
use url::Url;

/// One published weekly menu whose title carried a parseable date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    url: Url,
    text: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl MenuEntry {
    /// Returns `None` unless `start <= end`.
    pub fn new(url: Url, text: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then(|| Self {
            url,
            text: text.into(),
            start,
            end,
        })
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive on both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A "jedilnik" link whose text had no usable date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackLink {
    url: Url,
    text: String,
}

impl FallbackLink {
    pub fn new(url: Url, text: impl Into<String>) -> Self {
        Self {
            url,
            text: text.into(),
        }
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
