//! Pay event models for tax-authority reporting.
//!
//! This module contains the [`PayEvent`] record produced by the pay event
//! aggregator and its per-employee [`PayeePayload`] entries. Events are
//! created in `Draft` and transition to `Submitted` only after a successful
//! gateway result; a submitted event is never mutated again except for its
//! status having been recorded.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::FinancialYear;

/// The lifecycle status of a pay event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayEventStatus {
    /// Generated but not yet accepted by the authority.
    Draft,
    /// Accepted by the authority. Terminal.
    Submitted,
}

impl std::fmt::Display for PayEventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayEventStatus::Draft => write!(f, "Draft"),
            PayEventStatus::Submitted => write!(f, "Submitted"),
        }
    }
}

/// Per-employee entry inside a pay event.
///
/// Period figures cover this event's pay run only; YTD figures accumulate
/// the employee's period figures across every event of the same financial
/// year, this one included. YTD is never recomputed by subtraction or by
/// replaying YTD columns, only by summing period columns forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeePayload {
    /// The employee this payload reports.
    pub employee_id: String,
    /// Gross pay for the period.
    pub period_gross: Decimal,
    /// PAYG withholding for the period.
    pub period_tax: Decimal,
    /// Superannuation contribution for the period.
    pub period_super: Decimal,
    /// Year-to-date gross pay.
    pub ytd_gross: Decimal,
    /// Year-to-date PAYG withholding.
    pub ytd_tax: Decimal,
    /// Year-to-date superannuation.
    pub ytd_super: Decimal,
}

/// A reporting event covering one pay run, suitable for serialization to the
/// authority's submission format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayEvent {
    /// Identifier derived from the pay run and generation timestamp.
    pub id: String,
    /// Unique transaction identifier for the authority.
    pub transaction_id: Uuid,
    /// The date of the pay run this event covers.
    pub run_date: NaiveDate,
    /// When the event was accepted by the authority, if it has been.
    pub submission_date: Option<DateTime<Utc>>,
    /// The financial year this event reports into.
    pub financial_year: FinancialYear,
    /// Lifecycle status.
    pub status: PayEventStatus,
    /// Sum of gross pay across the run's payslips.
    pub total_gross: Decimal,
    /// Sum of PAYG withholding across the run's payslips.
    pub total_tax: Decimal,
    /// Sum of superannuation across the run's payslips.
    pub total_super: Decimal,
    /// Number of employees in the run.
    pub employee_count: u32,
    /// Per-employee payloads.
    pub payees: Vec<PayeePayload>,
}

impl PayEvent {
    /// Returns the payload for the given employee, if present.
    pub fn payee(&self, employee_id: &str) -> Option<&PayeePayload> {
        self.payees.iter().find(|p| p.employee_id == employee_id)
    }

    /// Marks the event as submitted, recording the acceptance time.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EventAlreadySubmitted`] when the event has
    /// already reached its terminal state.
    pub fn mark_submitted(&mut self, submitted_at: DateTime<Utc>) -> EngineResult<()> {
        if self.status == PayEventStatus::Submitted {
            return Err(EngineError::EventAlreadySubmitted {
                id: self.id.clone(),
            });
        }

        self.status = PayEventStatus::Submitted;
        self.submission_date = Some(submitted_at);
        Ok(())
    }
}
