use scraper::ElementRef;
use url::Url;

use super::menu_entry::{FallbackLink, MenuEntry};
use crate::parse::date_range::DateRangeMatch;
use crate::static_selector;

/// Lower-case word every weekly menu link contains.
pub const MENU_KEYWORD: &str = "jedilnik";

/// Every weekly menu link found on the listing page, in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<MenuEntry>,
    fallbacks: Vec<FallbackLink>,
}

impl Listing {
    pub const fn new(entries: Vec<MenuEntry>, fallbacks: Vec<FallbackLink>) -> Self {
        Self { entries, fallbacks }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn fallbacks(&self) -> &[FallbackLink] {
        &self.fallbacks
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.fallbacks.is_empty()
    }

    /// Collects menu links below `element`. Relative hrefs are resolved
    /// against the origin of `base`; links that cannot be resolved are skipped.
    pub fn from_html_element(element: ElementRef<'_>, base: &Url) -> Self {
        static_selector!(LINK_SELECTOR <- "a[href]");

        let mut listing = Self::default();
        for link in element.select(&LINK_SELECTOR) {
            // link titles are read flat, without the line breaks table cells get
            let text = link.text().collect::<String>();
            let text = text.trim();
            let href = link.attr("href").unwrap_or_default().trim();
            if text.is_empty() || href.is_empty() {
                continue;
            }
            if !text.to_lowercase().contains(MENU_KEYWORD) {
                continue;
            }
            let Some(url) = resolve_href(base, href) else {
                log::debug!("skipping menu link with unresolvable href {href:?}");
                continue;
            };
            listing.push(url, text);
        }
        listing
    }

    fn push(&mut self, url: Url, text: &str) {
        let dated = DateRangeMatch::find(text)
            .and_then(|range| range.dates())
            .and_then(|(start, end)| MenuEntry::new(url.clone(), text, start, end));
        match dated {
            Some(entry) => self.entries.push(entry),
            None => self.fallbacks.push(FallbackLink::new(url, text)),
        }
    }
}

/// Absolute `http(s)` URLs pass through; anything else hangs off the site origin.
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Url::parse(href).ok();
    }
    let origin = base.origin();
    if !origin.is_tuple() {
        return None;
    }
    let origin = origin.ascii_serialization();
    let joined = if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    };
    Url::parse(&joined).ok()
}
