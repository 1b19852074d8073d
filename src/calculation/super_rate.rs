//! Superannuation guarantee rate resolution functionality.
//!
//! This module resolves the statutory superannuation guarantee percentage
//! for a date from the effective-dated schedule, and computes the resulting
//! contribution amount for a gross figure.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::SuperRateSchedule;

/// The fallback guarantee percentage applied when no schedule entry is
/// effective on or before the query date (11.0%).
pub const DEFAULT_SUPER_GUARANTEE_RATE: Decimal = Decimal::from_parts(110, 0, 0, false, 1);

/// Resolves the superannuation guarantee percentage for a date.
///
/// The applicable rate is the rate of the latest schedule entry whose
/// effective date is on or before the query date. A date before the earliest
/// entry resolves to [`DEFAULT_SUPER_GUARANTEE_RATE`]; resolution never
/// fails. When two entries share an effective date, the later-listed entry
/// wins.
///
/// The function is pure and deterministic for a given schedule and date.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{resolve_super_rate, DEFAULT_SUPER_GUARANTEE_RATE};
/// use payroll_engine::config::SuperRateSchedule;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let schedule = SuperRateSchedule::statutory();
///
/// let mid_year = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
/// assert_eq!(resolve_super_rate(mid_year, &schedule), Decimal::new(115, 1));
///
/// let before_schedule = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// assert_eq!(resolve_super_rate(before_schedule, &schedule), DEFAULT_SUPER_GUARANTEE_RATE);
/// ```
pub fn resolve_super_rate(date: NaiveDate, schedule: &SuperRateSchedule) -> Decimal {
    schedule
        .entries()
        .iter()
        .rev()
        .find(|entry| entry.effective_date <= date)
        .map(|entry| entry.rate)
        .unwrap_or(DEFAULT_SUPER_GUARANTEE_RATE)
}

/// Computes the superannuation contribution for a gross figure.
///
/// # Arguments
///
/// * `gross` - The gross earnings the guarantee applies to
/// * `date` - The date used to resolve the guarantee percentage
/// * `schedule` - The effective-dated rate schedule
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::superannuation_for;
/// use payroll_engine::config::SuperRateSchedule;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = SuperRateSchedule::statutory();
/// let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
///
/// // $1000 at 11.5%
/// let contribution = superannuation_for(Decimal::from(1000), date, &schedule);
/// assert_eq!(contribution, Decimal::from_str("115.000").unwrap());
/// ```
pub fn superannuation_for(gross: Decimal, date: NaiveDate, schedule: &SuperRateSchedule) -> Decimal {
    gross * resolve_super_rate(date, schedule) / Decimal::ONE_HUNDRED
}
