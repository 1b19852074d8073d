//! Leave accrual calculation functionality.
//!
//! This module converts worked hours into accrued leave per leave type,
//! using the configured per-hour or per-period accrual rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{AccrualMethod, LeaveAccrualRule};

/// The accrual produced for one leave type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAccrual {
    /// The leave type accrued (e.g. "annual", "personal").
    pub leave_type: String,
    /// The accrued amount in hours.
    pub hours: Decimal,
}

/// Calculates leave accruals for a pay period's worked hours.
///
/// For each rule: a `PerHourWorked` rule accrues `rate` hours of leave per
/// basis hour, where the basis is ordinary hours plus overtime hours only
/// when the rule accrues on overtime. A `PerPayPeriod` rule accrues `rate`
/// unconditionally; callers must invoke this exactly once per pay period per
/// employee, as calling it twice double-accrues period-based rules.
///
/// # Arguments
///
/// * `ordinary_hours` - Ordinary hours worked in the period
/// * `overtime_hours` - Overtime hours worked in the period
/// * `rules` - The leave accrual rules in effect
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::accrue_leave;
/// use payroll_engine::config::{AccrualMethod, LeaveAccrualRule};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = vec![LeaveAccrualRule {
///     leave_type: "annual".to_string(),
///     method: AccrualMethod::PerHourWorked,
///     rate: Decimal::from_str("0.0769").unwrap(),
///     accrue_on_overtime: false,
/// }];
///
/// let accruals = accrue_leave(Decimal::from(38), Decimal::ZERO, &rules);
/// assert_eq!(accruals[0].hours, Decimal::from_str("2.9222").unwrap());
/// ```
pub fn accrue_leave(
    ordinary_hours: Decimal,
    overtime_hours: Decimal,
    rules: &[LeaveAccrualRule],
) -> Vec<LeaveAccrual> {
    rules
        .iter()
        .map(|rule| {
            let hours = match rule.method {
                AccrualMethod::PerHourWorked => {
                    let basis = if rule.accrue_on_overtime {
                        ordinary_hours + overtime_hours
                    } else {
                        ordinary_hours
                    };
                    basis * rule.rate
                }
                AccrualMethod::PerPayPeriod => rule.rate,
            };

            LeaveAccrual {
                leave_type: rule.leave_type.clone(),
                hours,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn per_hour_rule(leave_type: &str, rate: &str, accrue_on_overtime: bool) -> LeaveAccrualRule {
        LeaveAccrualRule {
            leave_type: leave_type.to_string(),
            method: AccrualMethod::PerHourWorked,
            rate: dec(rate),
            accrue_on_overtime,
        }
    }

    fn per_period_rule(leave_type: &str, rate: &str) -> LeaveAccrualRule {
        LeaveAccrualRule {
            leave_type: leave_type.to_string(),
            method: AccrualMethod::PerPayPeriod,
            rate: dec(rate),
            accrue_on_overtime: false,
        }
    }

    /// LA-001: per-hour accrual on ordinary hours only
    #[test]
    fn test_per_hour_ordinary_only() {
        let rules = vec![per_hour_rule("annual", "0.0769", false)];
        let accruals = accrue_leave(dec("38"), dec("4"), &rules);

        assert_eq!(accruals.len(), 1);
        assert_eq!(accruals[0].leave_type, "annual");
        // 38 x 0.0769, overtime excluded
        assert_eq!(accruals[0].hours, dec("2.9222"));
    }

    /// LA-002: per-hour accrual includes overtime when configured
    #[test]
    fn test_per_hour_including_overtime() {
        let rules = vec![per_hour_rule("annual", "0.0769", true)];
        let accruals = accrue_leave(dec("38"), dec("4"), &rules);

        // (38 + 4) x 0.0769
        assert_eq!(accruals[0].hours, dec("3.2298"));
    }

    /// LA-003: per-period accrual is unconditional
    #[test]
    fn test_per_period_is_unconditional() {
        let rules = vec![per_period_rule("rdo", "1.5")];

        let worked = accrue_leave(dec("38"), dec("4"), &rules);
        assert_eq!(worked[0].hours, dec("1.5"));

        let idle = accrue_leave(dec("0"), dec("0"), &rules);
        assert_eq!(idle[0].hours, dec("1.5"));
    }

    /// LA-004: one accrual per rule, in rule order
    #[test]
    fn test_one_accrual_per_rule() {
        let rules = vec![
            per_hour_rule("annual", "0.0769", false),
            per_hour_rule("personal", "0.0385", false),
            per_period_rule("rdo", "0.5"),
        ];

        let accruals = accrue_leave(dec("40"), dec("0"), &rules);
        let types: Vec<_> = accruals.iter().map(|a| a.leave_type.as_str()).collect();
        assert_eq!(types, vec!["annual", "personal", "rdo"]);
    }

    /// LA-005: zero hours accrue zero for per-hour rules
    #[test]
    fn test_zero_hours_accrue_zero() {
        let rules = vec![per_hour_rule("annual", "0.0769", true)];
        let accruals = accrue_leave(dec("0"), dec("0"), &rules);
        assert_eq!(accruals[0].hours, dec("0.0000"));
    }

    #[test]
    fn test_no_rules_yield_no_accruals() {
        let accruals = accrue_leave(dec("38"), dec("0"), &[]);
        assert!(accruals.is_empty());
    }

    #[test]
    fn test_accrual_serialization() {
        let accrual = LeaveAccrual {
            leave_type: "annual".to_string(),
            hours: dec("2.9222"),
        };

        let json = serde_json::to_string(&accrual).unwrap();
        assert!(json.contains("\"leave_type\":\"annual\""));
        assert!(json.contains("\"hours\":\"2.9222\""));
    }
}
