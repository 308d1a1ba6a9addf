//! Registration surface exposed to the host process.
//!
//! The host's change signal source delivers [`ResourceRef`] values
//! at-least-once, unordered and possibly coalesced; [`Binding::handle`] is
//! the entry point it invokes once per delivered reference. The returned
//! [`Requeue`] feeds the source's retry scheduling: expected races requeue
//! immediately, surfaced failures go through the source's backoff.
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, instrument};

use plo_model::ResourceRef;

use crate::reconciler::{Disposition, Reconciler};

/// The single resource kind this reconciler watches.
pub const WORKLOAD_UNIT_KIND: &str = "workload-unit";

/// Scheduling feedback for the change signal source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requeue {
    /// Converged; drop the signal.
    No,
    /// Expected race; re-enqueue without delay.
    Immediate,
    /// Surfaced failure; re-enqueue under the source's backoff policy.
    Backoff,
}

/// Binds a [`Reconciler`] to the resource kind it watches.
pub struct Binding {
    kind: &'static str,
    reconciler: Arc<Reconciler>,
}

impl Binding {
    /// Bind a reconciler to the workload-unit kind.
    pub fn workload_units(reconciler: Arc<Reconciler>) -> Self {
        Self {
            kind: WORKLOAD_UNIT_KIND,
            reconciler,
        }
    }

    /// Resource kind this binding watches, for host-side registration.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Handle one delivered change signal.
    ///
    /// Errors are logged here — the host's error-tracking path — and folded
    /// into [`Requeue::Backoff`]; benign dispositions map to their requeue
    /// mode directly.
    #[instrument(level = "debug", skip(self, cancel), fields(kind = self.kind, resource = %reference))]
    pub async fn handle(&self, reference: &ResourceRef, cancel: &CancellationToken) -> Requeue {
        match self.reconciler.reconcile(reference, cancel).await {
            Ok(Disposition::Converged) => Requeue::No,
            Ok(Disposition::ConflictRetry) | Ok(Disposition::NotFoundRetry) => Requeue::Immediate,
            Err(e) => {
                error!(error = %e, "reconciliation failed");
                Requeue::Backoff
            }
        }
    }
}
