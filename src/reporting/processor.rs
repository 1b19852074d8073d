//! Pay run processing against the event store.
//!
//! This module ties the aggregator to the injected event store. Generation
//! and append happen under a single gate so that two overlapping runs can
//! never both read the same "previous" history and undercount or
//! double-count year-to-date figures.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{FinancialYear, PayEvent, Payslip};
use crate::store::PayEventStore;

use super::aggregator::generate_pay_event;

/// Serializes pay event generation over a shared event store.
///
/// # Example
///
/// ```
/// use payroll_engine::reporting::PayRunProcessor;
/// use payroll_engine::store::InMemoryPayEventStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(InMemoryPayEventStore::new());
/// let processor = PayRunProcessor::new(store);
/// ```
pub struct PayRunProcessor {
    store: Arc<dyn PayEventStore>,
    gate: Mutex<()>,
}

impl PayRunProcessor {
    /// Creates a processor over the given store.
    pub fn new(store: Arc<dyn PayEventStore>) -> Self {
        Self {
            store,
            gate: Mutex::new(()),
        }
    }

    /// Generates a Draft event for the run and appends it to the store.
    ///
    /// The list-generate-append sequence runs under the processor's gate,
    /// which preserves YTD monotonicity when runs overlap.
    ///
    /// # Errors
    ///
    /// Propagates aggregation errors ([`crate::error::EngineError::EmptyPayRun`])
    /// and store failures.
    pub fn process_run(
        &self,
        pay_run_id: &str,
        payslips: &[Payslip],
        run_date: NaiveDate,
    ) -> EngineResult<PayEvent> {
        let _guard = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        let year = FinancialYear::from_date(run_date);
        let previous_events = self.store.list_events_for_year(year)?;
        let event = generate_pay_event(pay_run_id, payslips, &previous_events, run_date)?;
        self.store.append_event(&event)?;

        Ok(event)
    }

    /// Returns the store this processor writes to.
    pub fn store(&self) -> &Arc<dyn PayEventStore> {
        &self.store
    }
}
