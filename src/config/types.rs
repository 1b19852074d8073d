//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files: award rules, the effective
//! dated superannuation guarantee schedule and leave accrual rules.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of an award rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Splits hours above a daily threshold into overtime.
    Overtime,
    /// Loads the ordinary rate for work on particular days.
    Penalty,
}

/// The condition under which an award rule applies.
///
/// Conditions are a closed set of tagged variants so that adding a new
/// condition kind forces every match site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCondition {
    /// Applies to hours worked above the given daily threshold.
    HoursWorkedAbove(Decimal),
    /// Applies when the record's date falls on the given weekday.
    DayOfWeekEquals(Weekday),
}

fn default_multiplier() -> Decimal {
    // Statutory overtime default of 150%
    Decimal::new(15, 1)
}

/// A named award rule with its condition and rate multiplier.
///
/// When a rule omits its multiplier in configuration, the statutory overtime
/// default of 1.5 applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardRule {
    /// Rule name, used in logs and component descriptions.
    pub name: String,
    /// Whether this rule splits overtime or loads the ordinary rate.
    pub kind: RuleKind,
    /// The condition under which the rule applies.
    pub condition: RuleCondition,
    /// The multiplier applied to the base hourly rate.
    #[serde(default = "default_multiplier")]
    pub multiplier: Decimal,
}

/// An ordered set of award rules driving interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardRuleSet {
    rules: Vec<AwardRule>,
}

impl AwardRuleSet {
    /// Creates a rule set from the given rules.
    pub fn new(rules: Vec<AwardRule>) -> Self {
        Self { rules }
    }

    /// The standard rule set: overtime above 8 hours per day at 1.5x,
    /// Saturday loading 1.25x, Sunday loading 2.0x.
    pub fn standard() -> Self {
        Self::new(vec![
            AwardRule {
                name: "daily_overtime".to_string(),
                kind: RuleKind::Overtime,
                condition: RuleCondition::HoursWorkedAbove(Decimal::from(8)),
                multiplier: Decimal::new(15, 1),
            },
            AwardRule {
                name: "saturday_loading".to_string(),
                kind: RuleKind::Penalty,
                condition: RuleCondition::DayOfWeekEquals(Weekday::Sat),
                multiplier: Decimal::new(125, 2),
            },
            AwardRule {
                name: "sunday_loading".to_string(),
                kind: RuleKind::Penalty,
                condition: RuleCondition::DayOfWeekEquals(Weekday::Sun),
                multiplier: Decimal::new(20, 1),
            },
        ])
    }

    /// Returns all rules in configuration order.
    pub fn rules(&self) -> &[AwardRule] {
        &self.rules
    }

    /// Returns the overtime rule keyed on hours worked, if configured.
    ///
    /// When several overtime rules are configured the first wins.
    pub fn overtime_rule(&self) -> Option<&AwardRule> {
        self.rules.iter().find(|r| {
            r.kind == RuleKind::Overtime
                && matches!(r.condition, RuleCondition::HoursWorkedAbove(_))
        })
    }

    /// Returns the penalty rules in configuration order.
    pub fn penalty_rules(&self) -> impl Iterator<Item = &AwardRule> {
        self.rules.iter().filter(|r| r.kind == RuleKind::Penalty)
    }
}

/// One entry in the superannuation guarantee rate schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuperRateEntry {
    /// The date from which this rate applies.
    pub effective_date: NaiveDate,
    /// The guarantee percentage (e.g. 11.5 for 11.5%).
    pub rate: Decimal,
}

/// The effective-dated superannuation guarantee schedule.
///
/// Entries are kept sorted ascending by effective date. The sort is stable,
/// so two entries sharing an effective date keep their configured order and
/// the later-listed entry wins resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperRateSchedule {
    entries: Vec<SuperRateEntry>,
}

impl SuperRateSchedule {
    /// Creates a schedule, sorting entries ascending by effective date.
    pub fn new(entries: Vec<SuperRateEntry>) -> Self {
        let mut sorted = entries;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self { entries: sorted }
    }

    /// The statutory schedule shipped with the engine.
    pub fn statutory() -> Self {
        fn entry(year: i32, rate: Decimal) -> SuperRateEntry {
            SuperRateEntry {
                // 1 July is always a valid date
                effective_date: NaiveDate::from_ymd_opt(year, 7, 1)
                    .unwrap_or(NaiveDate::MIN),
                rate,
            }
        }

        Self::new(vec![
            entry(2023, Decimal::new(110, 1)),
            entry(2024, Decimal::new(115, 1)),
            entry(2025, Decimal::new(120, 1)),
        ])
    }

    /// Returns the entries sorted ascending by effective date.
    pub fn entries(&self) -> &[SuperRateEntry] {
        &self.entries
    }
}

/// How a leave accrual rule converts worked time into leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualMethod {
    /// Accrues `rate` hours of leave per hour worked.
    PerHourWorked,
    /// Accrues `rate` hours of leave once per pay period.
    PerPayPeriod,
}

/// A leave accrual rule for one leave type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveAccrualRule {
    /// The leave type this rule accrues (e.g. "annual", "personal").
    pub leave_type: String,
    /// How worked time converts into leave.
    pub method: AccrualMethod,
    /// Hours of leave per hour worked, or per pay period.
    pub rate: Decimal,
    /// Whether overtime hours count toward per-hour accrual.
    #[serde(default)]
    pub accrue_on_overtime: bool,
}

/// The complete engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    award_rules: AwardRuleSet,
    super_schedule: SuperRateSchedule,
    leave_rules: Vec<LeaveAccrualRule>,
}

impl EngineConfig {
    /// Creates a configuration from its component parts.
    pub fn new(
        award_rules: AwardRuleSet,
        super_schedule: SuperRateSchedule,
        leave_rules: Vec<LeaveAccrualRule>,
    ) -> Self {
        Self {
            award_rules,
            super_schedule,
            leave_rules,
        }
    }

    /// Returns the award rule set.
    pub fn award_rules(&self) -> &AwardRuleSet {
        &self.award_rules
    }

    /// Returns the superannuation rate schedule.
    pub fn super_schedule(&self) -> &SuperRateSchedule {
        &self.super_schedule
    }

    /// Returns the leave accrual rules.
    pub fn leave_rules(&self) -> &[LeaveAccrualRule] {
        &self.leave_rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_standard_rule_set_contents() {
        let rules = AwardRuleSet::standard();

        let overtime = rules.overtime_rule().unwrap();
        assert_eq!(overtime.multiplier, dec("1.5"));
        assert_eq!(
            overtime.condition,
            RuleCondition::HoursWorkedAbove(dec("8"))
        );

        let penalties: Vec<_> = rules.penalty_rules().collect();
        assert_eq!(penalties.len(), 2);
        assert_eq!(penalties[0].multiplier, dec("1.25"));
        assert_eq!(penalties[1].multiplier, dec("2.0"));
    }

    #[test]
    fn test_overtime_rule_absent_when_not_configured() {
        let rules = AwardRuleSet::new(vec![AwardRule {
            name: "saturday_loading".to_string(),
            kind: RuleKind::Penalty,
            condition: RuleCondition::DayOfWeekEquals(Weekday::Sat),
            multiplier: dec("1.25"),
        }]);

        assert!(rules.overtime_rule().is_none());
    }

    #[test]
    fn test_rule_multiplier_defaults_to_overtime_statutory() {
        let yaml = r#"
name: daily_overtime
kind: overtime
condition:
  hours_worked_above: "8"
"#;
        let rule: AwardRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.multiplier, dec("1.5"));
    }

    #[test]
    fn test_rule_condition_deserializes_weekday_names() {
        let yaml = r#"
name: saturday_loading
kind: penalty
condition:
  day_of_week_equals: saturday
multiplier: "1.25"
"#;
        let rule: AwardRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.condition, RuleCondition::DayOfWeekEquals(Weekday::Sat));
    }

    #[test]
    fn test_schedule_sorts_entries_ascending() {
        let schedule = SuperRateSchedule::new(vec![
            SuperRateEntry {
                effective_date: date("2025-07-01"),
                rate: dec("12.0"),
            },
            SuperRateEntry {
                effective_date: date("2023-07-01"),
                rate: dec("11.0"),
            },
        ]);

        let dates: Vec<_> = schedule.entries().iter().map(|e| e.effective_date).collect();
        assert_eq!(dates, vec![date("2023-07-01"), date("2025-07-01")]);
    }

    #[test]
    fn test_schedule_sort_is_stable_for_equal_dates() {
        let schedule = SuperRateSchedule::new(vec![
            SuperRateEntry {
                effective_date: date("2024-07-01"),
                rate: dec("11.5"),
            },
            SuperRateEntry {
                effective_date: date("2024-07-01"),
                rate: dec("11.75"),
            },
        ]);

        // Insertion order preserved; the later-listed entry stays last
        assert_eq!(schedule.entries()[1].rate, dec("11.75"));
    }

    #[test]
    fn test_statutory_schedule() {
        let schedule = SuperRateSchedule::statutory();
        assert_eq!(schedule.entries().len(), 3);
        assert_eq!(schedule.entries()[0].effective_date, date("2023-07-01"));
        assert_eq!(schedule.entries()[2].rate, dec("12.0"));
    }

    #[test]
    fn test_leave_rule_accrue_on_overtime_defaults_false() {
        let yaml = r#"
leave_type: annual
method: per_hour_worked
rate: "0.0769"
"#;
        let rule: LeaveAccrualRule = serde_yaml::from_str(yaml).unwrap();
        assert!(!rule.accrue_on_overtime);
        assert_eq!(rule.method, AccrualMethod::PerHourWorked);
    }

    #[test]
    fn test_engine_config_accessors() {
        let config = EngineConfig::new(
            AwardRuleSet::standard(),
            SuperRateSchedule::statutory(),
            vec![LeaveAccrualRule {
                leave_type: "annual".to_string(),
                method: AccrualMethod::PerHourWorked,
                rate: dec("0.0769"),
                accrue_on_overtime: false,
            }],
        );

        assert!(config.award_rules().overtime_rule().is_some());
        assert_eq!(config.super_schedule().entries().len(), 3);
        assert_eq!(config.leave_rules().len(), 1);
    }
}
