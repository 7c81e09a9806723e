mod listing;
mod menu_entry;

pub use listing::Listing;
pub use menu_entry::{FallbackLink, MenuEntry};
