//! Configuration for the payroll engine.
//!
//! This module provides loading and access to engine configuration:
//! award rules, the superannuation guarantee rate schedule and leave
//! accrual rules.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccrualMethod, AwardRule, AwardRuleSet, EngineConfig, LeaveAccrualRule, RuleCondition,
    RuleKind, SuperRateEntry, SuperRateSchedule,
};
