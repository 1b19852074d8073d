//! Domain models for the payroll compliance engine.

mod attendance;
mod financial_year;
mod pay_component;
mod pay_event;
mod payslip;

pub use attendance::{AttendanceRecord, BreakInterval};
pub use financial_year::FinancialYear;
pub use pay_component::{PayComponent, PayComponentType};
pub use pay_event::{PayEvent, PayEventStatus, PayeePayload};
pub use payslip::{Payslip, PayslipStatus};
