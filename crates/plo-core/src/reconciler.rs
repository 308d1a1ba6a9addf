//! Level-based reconciliation of one workload unit per invocation.
//!
//! Each pass is a single deterministic fetch → evaluate → mutate → commit
//! sequence. The reconciler keeps no state between passes; everything it
//! knows comes from the snapshot it just fetched, which makes replaying the
//! same change signal any number of times a guaranteed no-op once the
//! resource has converged.
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use plo_model::{LABEL_POD_NAME, ResourceRef};

use crate::accessor::{AccessorHandle, CommitError, FetchError};
use crate::error::ReconcileError;
use crate::policy::{actual_label_present, desired_label_present};

/// Outcome of one reconciliation pass.
///
/// Only benign outcomes appear here; surfaced failures travel through
/// [`ReconcileError`]. The driving loop re-enqueues `ConflictRetry` and
/// `NotFoundRetry` without delay — both are races expected to resolve on
/// the very next attempt — while errors go through its backoff policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Actual state equals desired state; nothing left to do.
    Converged,
    /// The resource changed between fetch and commit.
    ConflictRetry,
    /// The resource was deleted between fetch and commit.
    NotFoundRetry,
}

/// Drives the observed labels of a workload unit toward the state its
/// annotations request.
///
/// Holds no locks and no per-resource state; concurrent passes over
/// different references are safe, and the driving loop is responsible for
/// serializing passes over the same reference.
pub struct Reconciler {
    accessor: AccessorHandle,
}

impl Reconciler {
    /// Create a reconciler over the given store accessor.
    pub fn new(accessor: AccessorHandle) -> Self {
        Self { accessor }
    }

    /// Run one reconciliation pass for `reference`.
    ///
    /// Honors `cancel` across both store calls: a cancelled pass reports
    /// [`ReconcileError::Cancelled`] without touching the store further.
    /// Cancellation raced against a commit that already succeeded does not
    /// rewrite the outcome, since the write happened.
    #[instrument(level = "debug", skip(self, cancel), fields(resource = %reference))]
    pub async fn reconcile(
        &self,
        reference: &ResourceRef,
        cancel: &CancellationToken,
    ) -> Result<Disposition, ReconcileError> {
        let cancelled = || ReconcileError::Cancelled {
            reference: reference.clone(),
        };

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled()),
            res = self.accessor.fetch(reference) => res,
        };
        let mut snapshot = match fetched {
            Ok(snapshot) => snapshot,
            Err(FetchError::NotFound) => {
                // Deleted resources have nothing to converge; a fresh
                // notification will arrive if the object ever comes back.
                debug!("resource gone, nothing to reconcile");
                return Ok(Disposition::Converged);
            }
            Err(FetchError::Transient(reason)) => {
                return Err(ReconcileError::Fetch {
                    reference: reference.clone(),
                    reason,
                });
            }
        };

        let desired = desired_label_present(&snapshot.annotations);
        let actual = actual_label_present(&snapshot.labels, snapshot.name());

        if desired == actual {
            debug!(desired, "no update required");
            return Ok(Disposition::Converged);
        }

        if desired {
            info!("adding pod-name label");
            let name = snapshot.name().to_string();
            snapshot.set_label(LABEL_POD_NAME, name);
        } else {
            info!("removing pod-name label");
            snapshot.remove_label(LABEL_POD_NAME);
        }

        let committed = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled()),
            res = self.accessor.commit(snapshot) => res,
        };
        match committed {
            Ok(()) => Ok(Disposition::Converged),
            Err(CommitError::Conflict) => {
                debug!("resource changed since fetch, requeueing");
                Ok(Disposition::ConflictRetry)
            }
            Err(CommitError::NotFound) => {
                debug!("resource deleted since fetch, requeueing");
                Ok(Disposition::NotFoundRetry)
            }
            Err(CommitError::Transient(reason)) => Err(ReconcileError::Commit {
                reference: reference.clone(),
                reason,
            }),
        }
    }
}
