//! Payroll Compliance Engine for Australian Payroll
//!
//! This crate provides the calculation core of an HR administration system:
//! award interpretation of attendance records, superannuation guarantee rate
//! resolution, leave accrual, and generation of Single Touch Payroll style
//! reporting events with year-to-date bookkeeping.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reporting;
pub mod store;
pub mod submission;
