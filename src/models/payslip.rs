//! Payslip model and status lifecycle.
//!
//! A payslip is the per-employee, per-pay-period financial summary assembled
//! by the surrounding application from interpreted pay components, supplied
//! tax withholding and the resolved superannuation figure. The engine reads
//! payslips when aggregating a pay run into a reporting event.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The lifecycle status of a payslip.
///
/// `Paid` is terminal: a paid payslip may never transition again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    /// The payslip is being assembled and may still change.
    Draft,
    /// The payslip is finalised and ready for payment and reporting.
    Finalised,
    /// The payslip has been paid. Terminal.
    Paid,
}

impl PayslipStatus {
    /// Returns true for terminal states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PayslipStatus::Paid)
    }
}

impl std::fmt::Display for PayslipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayslipStatus::Draft => write!(f, "Draft"),
            PayslipStatus::Finalised => write!(f, "Finalised"),
            PayslipStatus::Paid => write!(f, "Paid"),
        }
    }
}

/// Per-employee, per-pay-period financial summary.
///
/// Gross pay is expected to equal the sum of the interpreted component
/// amounts plus allowances; PAYG tax is supplied by the caller, never
/// computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// The employee this payslip belongs to.
    pub employee_id: String,
    /// The start date of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Allowance amounts included in gross pay.
    pub allowances: Decimal,
    /// Overtime amounts included in gross pay.
    pub overtime: Decimal,
    /// PAYG withholding for the period, supplied by the caller.
    pub payg_tax: Decimal,
    /// Superannuation guarantee contribution for the period.
    pub superannuation: Decimal,
    /// Net pay for the period.
    pub net_pay: Decimal,
    /// The date payment is made.
    pub payment_date: NaiveDate,
    /// Lifecycle status.
    pub status: PayslipStatus,
}

impl Payslip {
    /// Transitions the payslip to the next status.
    ///
    /// Allowed transitions are Draft → Finalised → Paid. Any transition out
    /// of a terminal state, or skipping a step, is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStatusTransition`] when the lifecycle
    /// does not allow the requested transition.
    pub fn transition_to(&mut self, next: PayslipStatus) -> EngineResult<()> {
        let allowed = matches!(
            (self.status, next),
            (PayslipStatus::Draft, PayslipStatus::Finalised)
                | (PayslipStatus::Finalised, PayslipStatus::Paid)
        );

        if !allowed {
            return Err(EngineError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }

        self.status = next;
        Ok(())
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

    fn make_payslip(status: PayslipStatus) -> Payslip {
        Payslip {
            employee_id: "emp_001".to_string(),
            period_start: date("2025-01-13"),
            period_end: date("2025-01-19"),
            gross_pay: dec("1200.00"),
            allowances: dec("0"),
            overtime: dec("90.00"),
            payg_tax: dec("250.00"),
            superannuation: dec("138.00"),
            net_pay: dec("950.00"),
            payment_date: date("2025-01-21"),
            status,
        }
    }

    #[test]
    fn test_draft_to_finalised_allowed() {
        let mut payslip = make_payslip(PayslipStatus::Draft);
        payslip.transition_to(PayslipStatus::Finalised).unwrap();
        assert_eq!(payslip.status, PayslipStatus::Finalised);
    }

    #[test]
    fn test_finalised_to_paid_allowed() {
        let mut payslip = make_payslip(PayslipStatus::Finalised);
        payslip.transition_to(PayslipStatus::Paid).unwrap();
        assert_eq!(payslip.status, PayslipStatus::Paid);
    }

    #[test]
    fn test_draft_cannot_skip_to_paid() {
        let mut payslip = make_payslip(PayslipStatus::Draft);
        let result = payslip.transition_to(PayslipStatus::Paid);

        assert!(result.is_err());
        assert_eq!(payslip.status, PayslipStatus::Draft);
    }

    #[test]
    fn test_paid_is_terminal() {
        assert!(PayslipStatus::Paid.is_terminal());
        assert!(!PayslipStatus::Draft.is_terminal());
        assert!(!PayslipStatus::Finalised.is_terminal());

        let mut payslip = make_payslip(PayslipStatus::Paid);
        let result = payslip.transition_to(PayslipStatus::Draft);

        match result {
            Err(EngineError::InvalidStatusTransition { from, to }) => {
                assert_eq!(from, "Paid");
                assert_eq!(to, "Draft");
            }
            other => panic!("Expected InvalidStatusTransition, got {:?}", other),
        }
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PayslipStatus::Finalised).unwrap(),
            "\"finalised\""
        );
        assert_eq!(serde_json::to_string(&PayslipStatus::Paid).unwrap(), "\"paid\"");
    }

    #[test]
    fn test_payslip_serialization_round_trip() {
        let payslip = make_payslip(PayslipStatus::Finalised);
        let json = serde_json::to_string(&payslip).unwrap();
        let deserialized: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(payslip, deserialized);
    }

    #[test]
    fn test_payslip_deserialization() {
        let json = r#"{
            "employee_id": "emp_002",
            "period_start": "2025-01-13",
            "period_end": "2025-01-19",
            "gross_pay": "1500.00",
            "allowances": "25.00",
            "overtime": "0",
            "payg_tax": "300.00",
            "superannuation": "172.50",
            "net_pay": "1200.00",
            "payment_date": "2025-01-21",
            "status": "finalised"
        }"#;

        let payslip: Payslip = serde_json::from_str(json).unwrap();
        assert_eq!(payslip.employee_id, "emp_002");
        assert_eq!(payslip.gross_pay, dec("1500.00"));
        assert_eq!(payslip.status, PayslipStatus::Finalised);
    }
}
