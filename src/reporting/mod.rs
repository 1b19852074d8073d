//! Pay run reporting for the payroll engine.
//!
//! This module aggregates a pay run's payslips into tax-authority reporting
//! events with year-to-date bookkeeping, and serializes event generation
//! over the injected store.

mod aggregator;
mod processor;

pub use aggregator::generate_pay_event;
pub use processor::PayRunProcessor;
