use crate::parse::{DailyMenu, DateRangeMatch};
use crate::reference_date::ReferenceDate;

/// Allergen codes used on the weekly menus. Same text on every summary.
pub const ALLERGEN_LEGEND: &str = "G = gluten, J = jajce, S = soja\n\
L = laktoza, GS = gorčično seme, R = ribe\n\
O = oreščki, SE = sezam, ŽD = žveplov dioksid\n\
RA = raki, M = mehkužci, V = volčji bob";

const ITEM_SEPARATOR: &str = " | ";

/// Renders today's items as the multi-line text shown to users.
pub fn render(menu: &DailyMenu, today: &ReferenceDate, title: &str) -> String {
    format!(
        "🍽️ Kosilo za {}, {}\n📋 Jedilnik: {title}\n\n\
         {}, {}\n\
         🥗 MALICA: {}\n\
         🍝 KOSILO: {}\n\
         🍎 POP. MALICA: {}\n\n\
         📋 ALERGENI:\n{ALLERGEN_LEGEND}",
        today.day_name(),
        today.full_date(),
        menu.day_code(),
        today.short_date(),
        menu.morning_snack().join(ITEM_SEPARATOR),
        menu.lunch().join(ITEM_SEPARATOR),
        menu.afternoon_snack().join(ITEM_SEPARATOR),
    )
}

/// The date range written in a menu title, e.g. `12.1.–16.1. 2026`.
pub fn date_range(title: &str) -> Option<&str> {
    DateRangeMatch::find(title).map(|range| range.text)
}
