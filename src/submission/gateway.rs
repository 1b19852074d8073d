//! Submission gateway adapter functionality.
//!
//! This module wraps delivery of a pay event to the external authority
//! endpoint. The remote endpoint itself is an external collaborator,
//! modeled by the [`SubmissionGateway`] trait; the engine contributes local
//! validation, a transmit timeout and reconciliation of the accepted result
//! back into event status.
//!
//! Callers drive cancellation by dropping the submit future or by the
//! configured timeout, which surfaces as a retryable transport error rather
//! than an authority rejection.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::EngineResult;
use crate::models::{PayEvent, PayEventStatus};
use crate::store::PayEventStore;

/// The default transmit timeout applied by [`SubmissionClient::new`].
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// The typed result of a submission attempt.
///
/// `Rejected` is terminal for the event: the authority refused the figures
/// and a corrected event must be generated. `TransportError` and timeouts
/// are retryable with the same event. `Invalid` never left the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SubmissionOutcome {
    /// The authority accepted the event.
    Accepted {
        /// Receipt/confirmation identifier issued by the authority.
        receipt: String,
    },
    /// The authority rejected the event. Not retryable as-is.
    Rejected {
        /// The rejection reason surfaced to the operator.
        reason: String,
    },
    /// Local validation failed; no remote call was made. Not retryable as-is.
    Invalid {
        /// The validation failure.
        reason: String,
    },
    /// The transmission failed or timed out. Retryable.
    TransportError {
        /// A description of the transport fault.
        cause: String,
    },
}

impl SubmissionOutcome {
    /// Returns true when the event was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    /// Returns true when the same event may be resubmitted unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionOutcome::TransportError { .. })
    }
}

/// The external authority endpoint.
///
/// Implementations perform one transmission per call and classify the
/// result; they do not mutate the event.
pub trait SubmissionGateway: Send + Sync {
    /// Transmits the event to the authority.
    fn transmit(&self, event: &PayEvent) -> impl Future<Output = SubmissionOutcome> + Send;
}

/// Submits pay events through a gateway with local validation and a
/// transmit timeout.
#[derive(Debug, Clone)]
pub struct SubmissionClient<G> {
    gateway: G,
    timeout: Duration,
}

impl<G: SubmissionGateway> SubmissionClient<G> {
    /// Creates a client with the default timeout.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }

    /// Creates a client with a specific transmit timeout.
    pub fn with_timeout(gateway: G, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    /// Submits the event, validating locally before any remote call.
    ///
    /// A non-Draft event or a negative run gross yields
    /// [`SubmissionOutcome::Invalid`] without touching the gateway. A
    /// transmission exceeding the timeout yields
    /// [`SubmissionOutcome::TransportError`].
    pub async fn submit(&self, event: &PayEvent) -> SubmissionOutcome {
        if event.status != PayEventStatus::Draft {
            warn!(event_id = %event.id, status = %event.status, "Refusing to submit non-draft event");
            return SubmissionOutcome::Invalid {
                reason: format!("event is {}, only Draft events can be submitted", event.status),
            };
        }

        if event.total_gross.is_sign_negative() {
            warn!(event_id = %event.id, total_gross = %event.total_gross, "Refusing to submit negative gross");
            return SubmissionOutcome::Invalid {
                reason: format!("total gross {} must not be negative", event.total_gross),
            };
        }

        info!(
            event_id = %event.id,
            transaction_id = %event.transaction_id,
            employee_count = event.employee_count,
            "Submitting pay event"
        );

        match tokio::time::timeout(self.timeout, self.gateway.transmit(event)).await {
            Ok(outcome) => outcome,
            Err(_) => SubmissionOutcome::TransportError {
                cause: format!("transmission timed out after {:?}", self.timeout),
            },
        }
    }

    /// Submits the event and, on acceptance, transitions it to Submitted in
    /// place and in the store.
    ///
    /// Rejected and transport outcomes leave the event Draft; the outcome is
    /// returned for the operator either way.
    ///
    /// # Errors
    ///
    /// Propagates lifecycle and store failures while recording acceptance.
    pub async fn submit_and_reconcile(
        &self,
        event: &mut PayEvent,
        store: &dyn PayEventStore,
    ) -> EngineResult<SubmissionOutcome> {
        let outcome = self.submit(event).await;

        if let SubmissionOutcome::Accepted { receipt } = &outcome {
            info!(event_id = %event.id, receipt = %receipt, "Pay event accepted");
            event.mark_submitted(Utc::now())?;
            store.update_status(&event.id, PayEventStatus::Submitted)?;
        }

        Ok(outcome)
    }
}
