//! Pay event aggregation functionality.
//!
//! This module turns a pay run's finalized payslips and the history of
//! previously generated events into a new Draft reporting event carrying
//! period and year-to-date totals.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{FinancialYear, PayEvent, PayEventStatus, PayeePayload, Payslip};

/// Generates a Draft pay event for a pay run.
///
/// Run-level totals sum gross pay, PAYG withholding and superannuation
/// across the run's payslips. Each payee's year-to-date figures are built by
/// summing that employee's *period* figures across every previous event of
/// the run date's financial year, then adding the current payslip; prior YTD
/// columns are never replayed and events from other financial years never
/// participate, so YTD resets at the 1 July boundary. Payslips are expected
/// one per employee per run.
///
/// The event id derives from the pay run id and the generation timestamp;
/// the transaction id is a fresh UUID.
///
/// # Arguments
///
/// * `pay_run_id` - The identifier of the pay run being reported
/// * `payslips` - The run's finalized payslips
/// * `previous_events` - Previously generated events consulted for YTD
/// * `run_date` - The date of the pay run
///
/// # Errors
///
/// Returns [`EngineError::EmptyPayRun`] when the run carries no payslips.
pub fn generate_pay_event(
    pay_run_id: &str,
    payslips: &[Payslip],
    previous_events: &[PayEvent],
    run_date: NaiveDate,
) -> EngineResult<PayEvent> {
    if payslips.is_empty() {
        return Err(EngineError::EmptyPayRun {
            run_id: pay_run_id.to_string(),
        });
    }

    let financial_year = FinancialYear::from_date(run_date);

    let mut total_gross = Decimal::ZERO;
    let mut total_tax = Decimal::ZERO;
    let mut total_super = Decimal::ZERO;
    let mut payees = Vec::with_capacity(payslips.len());

    for payslip in payslips {
        total_gross += payslip.gross_pay;
        total_tax += payslip.payg_tax;
        total_super += payslip.superannuation;

        let mut ytd_gross = payslip.gross_pay;
        let mut ytd_tax = payslip.payg_tax;
        let mut ytd_super = payslip.superannuation;

        for event in previous_events
            .iter()
            .filter(|e| e.financial_year == financial_year)
        {
            if let Some(prior) = event.payee(&payslip.employee_id) {
                ytd_gross += prior.period_gross;
                ytd_tax += prior.period_tax;
                ytd_super += prior.period_super;
            }
        }

        payees.push(PayeePayload {
            employee_id: payslip.employee_id.clone(),
            period_gross: payslip.gross_pay,
            period_tax: payslip.payg_tax,
            period_super: payslip.superannuation,
            ytd_gross,
            ytd_tax,
            ytd_super,
        });
    }

    Ok(PayEvent {
        id: format!("{}-{}", pay_run_id, Utc::now().format("%Y%m%dT%H%M%S%3f")),
        transaction_id: Uuid::new_v4(),
        run_date,
        submission_date: None,
        financial_year,
        status: PayEventStatus::Draft,
        total_gross,
        total_tax,
        total_super,
        employee_count: payslips.len() as u32,
        payees,
    })
}
