mod date_range;
mod element_text;
mod error;
mod listing_page;
mod menu_page;
mod static_selector;

pub use date_range::DateRangeMatch;
pub use error::Error;
pub use listing_page::{FallbackLink, Listing, MenuEntry};
pub use menu_page::DailyMenu;
