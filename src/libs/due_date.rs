//! Due date handling for tasks.
//!
//! Dates are stored as text in the exact `dd/MM/yyyy` shape. A task without
//! a due date stores the fixed sentinel string instead of NULL, so the
//! column is always comparable and displayable as-is.

use chrono::NaiveDate;
use std::fmt::{Display, Formatter};

/// Storage format for task due dates, zero-padded day and month.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Literal stored and displayed when a task has no due date.
pub const NO_DUE_DATE: &str = "Sin fecha establecida";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDate {
    Unset,
    On(NaiveDate),
}

impl DueDate {
    /// Parses the stored column text back into a due date.
    ///
    /// Anything that is neither the sentinel nor a valid `dd/MM/yyyy` date
    /// is treated as unset rather than failing the whole row.
    pub fn from_db_text(text: &str) -> Self {
        if text == NO_DUE_DATE {
            return DueDate::Unset;
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(DueDate::On)
            .unwrap_or(DueDate::Unset)
    }

    /// Parses user input; an empty string means no due date.
    pub fn parse_input(input: &str) -> Result<Self, chrono::ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(DueDate::Unset);
        }
        NaiveDate::parse_from_str(input, DATE_FORMAT).map(DueDate::On)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DueDate::Unset => None,
            DueDate::On(date) => Some(*date),
        }
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DueDate::Unset => write!(f, "{}", NO_DUE_DATE),
            DueDate::On(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}
