//! Australian financial year value type.
//!
//! Reporting events are bucketed by financial year so that year-to-date
//! figures reset at the statutory boundary (1 July).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An Australian financial year, identified by the calendar year it ends in.
///
/// `FinancialYear::from_date` maps 1 July 2024 through 30 June 2025 to the
/// financial year ending 2025.
///
/// # Example
///
/// ```
/// use payroll_engine::models::FinancialYear;
/// use chrono::NaiveDate;
///
/// let fy = FinancialYear::from_date(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
/// assert_eq!(fy.ending_year(), 2025);
/// assert_eq!(fy.label(), "2024-25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialYear(i32);

impl FinancialYear {
    /// Creates a financial year from the calendar year it ends in.
    pub fn ending_in(year: i32) -> Self {
        Self(year)
    }

    /// Returns the financial year containing the given date.
    ///
    /// Dates in July through December belong to the year ending the
    /// following June; dates in January through June belong to the year
    /// ending that June.
    pub fn from_date(date: NaiveDate) -> Self {
        if date.month() >= 7 {
            Self(date.year() + 1)
        } else {
            Self(date.year())
        }
    }

    /// Returns the calendar year this financial year ends in.
    pub fn ending_year(&self) -> i32 {
        self.0
    }

    /// Returns whether the given date falls within this financial year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// Returns the following financial year.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the conventional label, e.g. "2024-25".
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.0 - 1, self.0 % 100)
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
