//! Pay event persistence boundary.
//!
//! The engine does not persist data itself: it reads and writes events
//! through the [`PayEventStore`] trait, which the surrounding application
//! implements over its database. An in-memory implementation is provided
//! for tests and for embedding without a database.

use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use crate::error::{EngineError, EngineResult};
use crate::models::{FinancialYear, PayEvent, PayEventStatus};

/// Storage boundary for pay events.
///
/// Implementations must be safe to share across threads; the engine only
/// ever holds `&self` when calling in.
pub trait PayEventStore: Send + Sync {
    /// Lists every event whose run date falls in the given financial year,
    /// in append order.
    fn list_events_for_year(&self, year: FinancialYear) -> EngineResult<Vec<PayEvent>>;

    /// Appends a newly generated Draft event.
    fn append_event(&self, event: &PayEvent) -> EngineResult<()>;

    /// Updates the status of a stored event after submission.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EventNotFound`] for unknown ids, and lifecycle
    /// errors when the transition is not allowed.
    fn update_status(&self, event_id: &str, status: PayEventStatus) -> EngineResult<()>;
}

/// An in-memory [`PayEventStore`] backed by a mutex-guarded vector.
///
/// # Example
///
/// ```
/// use payroll_engine::store::{InMemoryPayEventStore, PayEventStore};
/// use payroll_engine::models::FinancialYear;
///
/// let store = InMemoryPayEventStore::new();
/// let events = store.list_events_for_year(FinancialYear::ending_in(2025)).unwrap();
/// assert!(events.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPayEventStore {
    events: Mutex<Vec<PayEvent>>,
}

impl InMemoryPayEventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn events(&self) -> std::sync::MutexGuard<'_, Vec<PayEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PayEventStore for InMemoryPayEventStore {
    fn list_events_for_year(&self, year: FinancialYear) -> EngineResult<Vec<PayEvent>> {
        Ok(self
            .events()
            .iter()
            .filter(|e| e.financial_year == year)
            .cloned()
            .collect())
    }

    fn append_event(&self, event: &PayEvent) -> EngineResult<()> {
        self.events().push(event.clone());
        Ok(())
    }

    fn update_status(&self, event_id: &str, status: PayEventStatus) -> EngineResult<()> {
        let mut events = self.events();
        let event = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| EngineError::EventNotFound {
                id: event_id.to_string(),
            })?;

        match status {
            PayEventStatus::Submitted => event.mark_submitted(Utc::now()),
            PayEventStatus::Draft => {
                if event.status == PayEventStatus::Submitted {
                    Err(EngineError::InvalidStatusTransition {
                        from: event.status.to_string(),
                        to: status.to_string(),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }
}
