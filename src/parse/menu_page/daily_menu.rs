use scraper::ElementRef;

use crate::parse::element_text::{element_text, split_items};
use crate::parse::Error;
use crate::static_selector;

/// Weekday label plus the three meal columns.
const MIN_CELLS: usize = 4;

/// One day's row of the weekly menu table, split into its meal columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyMenu {
    day_code: &'static str,
    morning_snack: Vec<String>,
    lunch: Vec<String>,
    afternoon_snack: Vec<String>,
}

impl DailyMenu {
    /// Finds the row labelled `day_code` in the first table below `element`.
    ///
    /// Only the first table is considered and the first matching row wins.
    /// Columns past the afternoon snack are ignored.
    pub fn from_html_element(
        element: ElementRef<'_>,
        day_code: &'static str,
    ) -> Result<Self, Error> {
        static_selector!(TABLE_SELECTOR <- "table");
        static_selector!(ROW_SELECTOR <- "tr");
        static_selector!(CELL_SELECTOR <- "td, th");

        let table = element
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or(Error::TableNotFound)?;

        let row = table
            .select(&ROW_SELECTOR)
            .find(|row| {
                row.select(&CELL_SELECTOR)
                    .next()
                    .is_some_and(|first| element_text(first).trim().to_uppercase() == day_code)
            })
            .ok_or(Error::NoRowForWeekday(day_code))?;

        let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
        if cells.len() < MIN_CELLS {
            return Err(Error::IncompleteTable { cells: cells.len() });
        }
        let items = |i: usize| split_items(&element_text(cells[i]));

        Ok(Self {
            day_code,
            morning_snack: items(1),
            lunch: items(2),
            afternoon_snack: items(3),
        })
    }

    pub const fn day_code(&self) -> &'static str {
        self.day_code
    }

    /// MALICA
    pub fn morning_snack(&self) -> &[String] {
        &self.morning_snack
    }

    /// KOSILO
    pub fn lunch(&self) -> &[String] {
        &self.lunch
    }

    /// POP. MALICA
    pub fn afternoon_snack(&self) -> &[String] {
        &self.afternoon_snack
    }
}
