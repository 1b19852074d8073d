//! Calculation logic for the payroll compliance engine.
//!
//! This module contains the pure calculation functions: award
//! interpretation of attendance records into pay components, the daily
//! overtime split, penalty loading resolution, superannuation guarantee
//! rate resolution and leave accrual. All functions are side-effect-free
//! and safe to call concurrently for different employees and pay runs.

mod award_interpretation;
mod leave_accrual;
mod overtime_split;
mod penalty_loading;
mod super_rate;

pub use award_interpretation::{interpret, DEFAULT_OVERTIME_MULTIPLIER};
pub use leave_accrual::{accrue_leave, LeaveAccrual};
pub use overtime_split::{split_daily_overtime, OvertimeSplit};
pub use penalty_loading::resolve_penalty_multiplier;
pub use super_rate::{resolve_super_rate, superannuation_for, DEFAULT_SUPER_GUARANTEE_RATE};
