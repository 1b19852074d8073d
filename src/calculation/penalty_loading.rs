//! Penalty loading resolution functionality.
//!
//! This module determines the ordinary-hours multiplier for a date by
//! evaluating the configured penalty rules. When several penalty rules
//! match, only the highest multiplier applies; loadings never stack.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::{AwardRuleSet, RuleCondition};

/// Resolves the ordinary-hours multiplier for the given date.
///
/// Starting from 1.0, every penalty rule whose day-of-week condition matches
/// the date raises the multiplier to the maximum of itself and the rule's
/// multiplier. Penalty rules with non-day conditions do not participate.
///
/// # Arguments
///
/// * `date` - The date of the attendance record
/// * `rules` - The award rule set in effect
///
/// # Returns
///
/// The multiplier to apply to the base hourly rate for ordinary hours:
/// exactly 1.0 when no penalty rule matches.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_penalty_multiplier;
/// use payroll_engine::config::AwardRuleSet;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = AwardRuleSet::standard();
///
/// // 2025-01-15 is a Wednesday: no loading
/// let weekday = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(resolve_penalty_multiplier(weekday, &rules), Decimal::ONE);
///
/// // 2025-01-19 is a Sunday: 2.0x loading
/// let sunday = NaiveDate::from_ymd_opt(2025, 1, 19).unwrap();
/// assert_eq!(resolve_penalty_multiplier(sunday, &rules), Decimal::new(20, 1));
/// ```
pub fn resolve_penalty_multiplier(date: NaiveDate, rules: &AwardRuleSet) -> Decimal {
    let mut multiplier = Decimal::ONE;

    for rule in rules.penalty_rules() {
        let RuleCondition::DayOfWeekEquals(weekday) = rule.condition else {
            continue;
        };

        if weekday == date.weekday() && rule.multiplier > multiplier {
            multiplier = rule.multiplier;
        }
    }

    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AwardRule, RuleKind};
    use chrono::Weekday;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// PL-001: weekday with no matching rule is exactly 1.0
    #[test]
    fn test_weekday_is_unloaded() {
        let rules = AwardRuleSet::standard();
        // 2025-01-15 is a Wednesday
        assert_eq!(resolve_penalty_multiplier(date("2025-01-15"), &rules), dec("1.0"));
    }

    /// PL-002: Saturday loading applies
    #[test]
    fn test_saturday_loading() {
        let rules = AwardRuleSet::standard();
        // 2025-01-18 is a Saturday
        assert_eq!(resolve_penalty_multiplier(date("2025-01-18"), &rules), dec("1.25"));
    }

    /// PL-003: Sunday loading applies
    #[test]
    fn test_sunday_loading() {
        let rules = AwardRuleSet::standard();
        // 2025-01-19 is a Sunday
        assert_eq!(resolve_penalty_multiplier(date("2025-01-19"), &rules), dec("2.0"));
    }

    /// PL-004: the highest matching multiplier wins, loadings never stack
    #[test]
    fn test_highest_multiplier_wins() {
        let rules = AwardRuleSet::new(vec![
            AwardRule {
                name: "saturday_loading".to_string(),
                kind: RuleKind::Penalty,
                condition: RuleCondition::DayOfWeekEquals(Weekday::Sat),
                multiplier: dec("1.25"),
            },
            AwardRule {
                name: "saturday_afternoon_loading".to_string(),
                kind: RuleKind::Penalty,
                condition: RuleCondition::DayOfWeekEquals(Weekday::Sat),
                multiplier: dec("1.5"),
            },
        ]);

        // Max of 1.25 and 1.5, not their sum or product
        assert_eq!(resolve_penalty_multiplier(date("2025-01-18"), &rules), dec("1.5"));
    }

    /// PL-005: a matching rule below 1.0 never lowers the multiplier
    #[test]
    fn test_multiplier_never_drops_below_one() {
        let rules = AwardRuleSet::new(vec![AwardRule {
            name: "odd_discount".to_string(),
            kind: RuleKind::Penalty,
            condition: RuleCondition::DayOfWeekEquals(Weekday::Sat),
            multiplier: dec("0.8"),
        }]);

        assert_eq!(resolve_penalty_multiplier(date("2025-01-18"), &rules), dec("1.0"));
    }

    #[test]
    fn test_penalty_rules_with_hours_conditions_are_ignored() {
        let rules = AwardRuleSet::new(vec![AwardRule {
            name: "misconfigured_penalty".to_string(),
            kind: RuleKind::Penalty,
            condition: RuleCondition::HoursWorkedAbove(dec("4")),
            multiplier: dec("3.0"),
        }]);

        assert_eq!(resolve_penalty_multiplier(date("2025-01-18"), &rules), dec("1.0"));
    }

    #[test]
    fn test_empty_rule_set() {
        let rules = AwardRuleSet::new(vec![]);
        assert_eq!(resolve_penalty_multiplier(date("2025-01-18"), &rules), dec("1.0"));
    }
}
