use std::fmt::Display;

/// Reasons a weekly menu page could not be turned into today's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    TableNotFound,
    NoRowForWeekday(&'static str),
    IncompleteTable { cells: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableNotFound => write!(f, "Menu table not found on the weekly menu page"),
            Self::NoRowForWeekday(code) => write!(f, "No menu row for weekday {code}"),
            Self::IncompleteTable { cells } => write!(
                f,
                "Incomplete table structure: expected at least 4 cells, found {cells}"
            ),
        }
    }
}

impl std::error::Error for Error {}

