//! Daily overtime split functionality.
//!
//! This module provides the function for splitting worked hours into
//! ordinary and overtime portions at a daily threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of splitting worked hours at a daily overtime threshold.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{split_daily_overtime, OvertimeSplit};
/// use rust_decimal::Decimal;
///
/// let split = split_daily_overtime(Decimal::from(10), Decimal::from(8));
/// assert_eq!(split.ordinary_hours, Decimal::from(8));
/// assert_eq!(split.overtime_hours, Decimal::from(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// The number of ordinary hours (up to the threshold).
    pub ordinary_hours: Decimal,
    /// The number of overtime hours (hours exceeding the threshold).
    pub overtime_hours: Decimal,
}

/// Splits worked hours into ordinary hours (up to the threshold) and
/// overtime hours (any excess over the threshold).
///
/// # Arguments
///
/// * `worked_hours` - The total hours worked in the day
/// * `threshold` - The daily overtime threshold (typically 8 hours)
///
/// # Returns
///
/// An [`OvertimeSplit`] whose two fields always sum back to `worked_hours`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_daily_overtime;
/// use rust_decimal::Decimal;
///
/// // At the threshold: no overtime
/// let split = split_daily_overtime(Decimal::from(8), Decimal::from(8));
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
///
/// // Under the threshold: all ordinary
/// let split = split_daily_overtime(Decimal::from(6), Decimal::from(8));
/// assert_eq!(split.ordinary_hours, Decimal::from(6));
/// ```
pub fn split_daily_overtime(worked_hours: Decimal, threshold: Decimal) -> OvertimeSplit {
    if worked_hours > threshold {
        OvertimeSplit {
            ordinary_hours: threshold,
            overtime_hours: worked_hours - threshold,
        }
    } else {
        OvertimeSplit {
            ordinary_hours: worked_hours,
            overtime_hours: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// OS-001: exactly 8 hours - no overtime
    #[test]
    fn test_exactly_8_hours_no_overtime() {
        let split = split_daily_overtime(dec("8"), dec("8"));
        assert_eq!(split.ordinary_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("0"));
    }

    /// OS-002: 10 hours - 2 hours overtime
    #[test]
    fn test_10_hours_2_hours_overtime() {
        let split = split_daily_overtime(dec("10"), dec("8"));
        assert_eq!(split.ordinary_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("2"));
    }

    /// OS-003: 6 hours - no overtime
    #[test]
    fn test_6_hours_no_overtime() {
        let split = split_daily_overtime(dec("6"), dec("8"));
        assert_eq!(split.ordinary_hours, dec("6"));
        assert_eq!(split.overtime_hours, dec("0"));
    }

    /// OS-004: 12 hours - 4 hours overtime
    #[test]
    fn test_12_hours_4_hours_overtime() {
        let split = split_daily_overtime(dec("12"), dec("8"));
        assert_eq!(split.ordinary_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("4"));
    }

    /// OS-005: zero hours
    #[test]
    fn test_zero_hours() {
        let split = split_daily_overtime(dec("0"), dec("8"));
        assert_eq!(split.ordinary_hours, dec("0"));
        assert_eq!(split.overtime_hours, dec("0"));
    }

    #[test]
    fn test_custom_threshold() {
        let split = split_daily_overtime(dec("12"), dec("10"));
        assert_eq!(split.ordinary_hours, dec("10"));
        assert_eq!(split.overtime_hours, dec("2"));
    }

    #[test]
    fn test_split_conserves_hours() {
        for worked in ["0", "4", "8", "9", "12", "16"] {
            let worked = dec(worked);
            let split = split_daily_overtime(worked, dec("8"));
            assert_eq!(split.ordinary_hours + split.overtime_hours, worked);
        }
    }

    #[test]
    fn test_serialization() {
        let split = split_daily_overtime(dec("10"), dec("8"));
        let json = serde_json::to_string(&split).unwrap();
        let deserialized: OvertimeSplit = serde_json::from_str(&json).unwrap();
        assert_eq!(split, deserialized);
    }
}
