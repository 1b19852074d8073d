//! Attendance record model and related types.
//!
//! This module defines the AttendanceRecord and BreakInterval structs for
//! representing raw timesheet facts fed into the award interpreter.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a break taken during an attendance span.
///
/// Break intervals are rostering metadata carried on the record; the award
/// interpreter pays the whole clocked span and does not deduct them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
}

/// Represents one employee-day of raw attendance facts.
///
/// A record missing either clock time is *incomplete*: it interprets to zero
/// pay components rather than producing an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the attendance (used for day-of-week rules).
    pub date: NaiveDate,
    /// The clock-in timestamp, if recorded.
    pub clock_in: Option<NaiveDateTime>,
    /// The clock-out timestamp, if recorded.
    pub clock_out: Option<NaiveDateTime>,
    /// Breaks taken during the span.
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
    /// Free-form metadata such as location or project code.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl AttendanceRecord {
    /// Returns true when both clock times are present.
    ///
    /// Incomplete records are a no-op for interpretation, not an error.
    pub fn is_complete(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_some()
    }

    /// Calculates the total worked hours for the record.
    ///
    /// The span is measured in whole hours between clock-out and clock-in and
    /// floored at zero, so a clock-out before clock-in yields zero rather
    /// than negative hours. Incomplete records yield zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    /// use std::collections::HashMap;
    ///
    /// let record = AttendanceRecord {
    ///     id: "att_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
    ///     clock_in: Some(NaiveDateTime::parse_from_str("2025-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     clock_out: Some(NaiveDateTime::parse_from_str("2025-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     breaks: vec![],
    ///     metadata: HashMap::new(),
    /// };
    /// assert_eq!(record.total_hours(), Decimal::from(8));
    /// ```
    pub fn total_hours(&self) -> Decimal {
        let (Some(clock_in), Some(clock_out)) = (self.clock_in, self.clock_out) else {
            return Decimal::ZERO;
        };

        // Whole-hour difference, floored at zero for inverted spans
        let hours = (clock_out - clock_in).num_hours().max(0);
        Decimal::from(hours)
    }

    /// Returns the day of the week for the record's date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}
