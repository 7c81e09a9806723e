use reqwest::StatusCode;

use crate::parse;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Parse(parse::Error),
    Request(reqwest::Error),
    /// A page answered with a non-2xx status.
    Status {
        page: Page,
        status: StatusCode,
    },
    NoMenu,
    InvalidDate(String),
    InvalidQuery(String),
}

/// Which of the two upstream pages a request was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Listing,
    WeeklyMenu,
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Page::Listing => write!(f, "Menu list"),
            Page::WeeklyMenu => write!(f, "Menu page"),
        }
    }
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{e}"),
            Error::Request(e) => write!(f, "Request error: {e}"),
            Error::Status { page, status } => write!(f, "{page} request failed: {status}"),
            Error::NoMenu => write!(f, "No menu found for this week"),
            Error::InvalidDate(s) => write!(f, "Invalid date {s:?}, expected YYYY-MM-DD"),
            Error::InvalidQuery(s) => write!(f, "Invalid query: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Request(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
