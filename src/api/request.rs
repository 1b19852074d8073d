//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/interpret`
//! and `/pay-events` endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{AttendanceRecord, BreakInterval, Payslip, PayslipStatus};

/// Request body for the `/interpret` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretRequest {
    /// The attendance record to interpret.
    pub record: AttendanceRecordRequest,
    /// The employee's base hourly rate.
    pub base_hourly_rate: Decimal,
}

/// Attendance record information in an interpret request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date of the attendance.
    pub date: NaiveDate,
    /// The clock-in timestamp, if recorded.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// The clock-out timestamp, if recorded.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Breaks taken during the span.
    #[serde(default)]
    pub breaks: Vec<BreakIntervalRequest>,
    /// Free-form metadata such as location or project code.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Break interval information in an interpret request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakIntervalRequest {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
}

/// Request body for the `/pay-events` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayEventRequest {
    /// The identifier of the pay run being reported.
    pub pay_run_id: String,
    /// The date of the pay run.
    pub run_date: NaiveDate,
    /// The run's finalized payslips.
    pub payslips: Vec<PayslipRequest>,
}

fn default_payslip_status() -> PayslipStatus {
    PayslipStatus::Finalised
}

/// Payslip information in a pay event request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employee this payslip belongs to.
    pub employee_id: String,
    /// The start date of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Allowance amounts included in gross pay.
    #[serde(default)]
    pub allowances: Decimal,
    /// Overtime amounts included in gross pay.
    #[serde(default)]
    pub overtime: Decimal,
    /// PAYG withholding for the period.
    pub payg_tax: Decimal,
    /// Superannuation contribution for the period.
    pub superannuation: Decimal,
    /// Net pay for the period.
    pub net_pay: Decimal,
    /// The date payment is made.
    pub payment_date: NaiveDate,
    /// Lifecycle status; finalized when omitted.
    #[serde(default = "default_payslip_status")]
    pub status: PayslipStatus,
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            id: req.id,
            employee_id: req.employee_id,
            date: req.date,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            breaks: req.breaks.into_iter().map(Into::into).collect(),
            metadata: req.metadata,
        }
    }
}

impl From<BreakIntervalRequest> for BreakInterval {
    fn from(req: BreakIntervalRequest) -> Self {
        BreakInterval {
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

impl From<PayslipRequest> for Payslip {
    fn from(req: PayslipRequest) -> Self {
        Payslip {
            employee_id: req.employee_id,
            period_start: req.period_start,
            period_end: req.period_end,
            gross_pay: req.gross_pay,
            allowances: req.allowances,
            overtime: req.overtime,
            payg_tax: req.payg_tax,
            superannuation: req.superannuation,
            net_pay: req.net_pay,
            payment_date: req.payment_date,
            status: req.status,
        }
    }
}
