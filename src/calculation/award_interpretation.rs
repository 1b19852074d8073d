//! Award interpretation functionality.
//!
//! This module converts one attendance record plus a base hourly rate into
//! pay components, applying the configured daily overtime threshold and
//! day-of-week penalty loadings.

use rust_decimal::Decimal;

use crate::config::{AwardRuleSet, RuleCondition};
use crate::models::{AttendanceRecord, PayComponent, PayComponentType};

use super::overtime_split::{split_daily_overtime, OvertimeSplit};
use super::penalty_loading::resolve_penalty_multiplier;

/// Default overtime multiplier when the rule set carries no overtime rule.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Interprets an attendance record into pay components.
///
/// The interpretation never fails: an incomplete record (missing clock-in or
/// clock-out) yields an empty list, and malformed spans floor at zero hours.
///
/// # Algorithm
///
/// 1. An incomplete record returns no components.
/// 2. The worked span is the whole-hour clock difference, floored at zero.
/// 3. Hours above the configured overtime threshold split into overtime;
///    without an overtime rule all hours are ordinary.
/// 4. The ordinary rate is loaded by the highest matching penalty rule.
/// 5. A component is emitted per category only when its hours are non-zero.
///
/// Gross pay is the sum of the returned component amounts; that summation is
/// the payslip builder's responsibility, not this function's.
///
/// # Arguments
///
/// * `record` - The attendance record to interpret
/// * `base_hourly_rate` - The employee's base hourly rate
/// * `rules` - The award rule set in effect
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::interpret;
/// use payroll_engine::config::AwardRuleSet;
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// // 8 hours on a Wednesday at $30/h
/// let record = AttendanceRecord {
///     id: "att_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
///     clock_in: Some(NaiveDateTime::parse_from_str("2025-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     clock_out: Some(NaiveDateTime::parse_from_str("2025-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     breaks: vec![],
///     metadata: HashMap::new(),
/// };
///
/// let components = interpret(&record, Decimal::from(30), &AwardRuleSet::standard());
/// assert_eq!(components.len(), 1);
/// assert_eq!(components[0].amount, Decimal::from(240));
/// ```
pub fn interpret(
    record: &AttendanceRecord,
    base_hourly_rate: Decimal,
    rules: &AwardRuleSet,
) -> Vec<PayComponent> {
    if !record.is_complete() {
        return Vec::new();
    }

    let total_hours = record.total_hours();

    let overtime = rules.overtime_rule().and_then(|rule| match rule.condition {
        RuleCondition::HoursWorkedAbove(threshold) => Some((threshold, rule.multiplier)),
        RuleCondition::DayOfWeekEquals(_) => None,
    });

    let (split, overtime_multiplier) = match overtime {
        Some((threshold, multiplier)) => (split_daily_overtime(total_hours, threshold), multiplier),
        None => (
            OvertimeSplit {
                ordinary_hours: total_hours,
                overtime_hours: Decimal::ZERO,
            },
            DEFAULT_OVERTIME_MULTIPLIER,
        ),
    };

    let ordinary_multiplier = resolve_penalty_multiplier(record.date, rules);

    let mut components = Vec::with_capacity(2);

    if split.ordinary_hours > Decimal::ZERO {
        let description = if ordinary_multiplier == Decimal::ONE {
            "Ordinary hours".to_string()
        } else {
            format!(
                "Ordinary hours at {}x loading",
                ordinary_multiplier.normalize()
            )
        };
        components.push(PayComponent::new(
            "ORD",
            description,
            split.ordinary_hours,
            base_hourly_rate * ordinary_multiplier,
            PayComponentType::Ordinary,
        ));
    }

    if split.overtime_hours > Decimal::ZERO {
        components.push(PayComponent::new(
            "OT",
            format!("Overtime hours at {}x", overtime_multiplier.normalize()),
            split.overtime_hours,
            base_hourly_rate * overtime_multiplier,
            PayComponentType::Overtime,
        ));
    }

    components
}
