use thiserror::Error;

use plo_model::ResourceRef;

/// Failures a reconciliation pass surfaces to the driving loop.
///
/// Benign outcomes (not-found on fetch, version conflict, not-found on
/// commit) never appear here; they are absorbed into
/// [`crate::reconciler::Disposition`]. Everything in this enum is expected
/// to be retried by the signal source under its own backoff policy; the
/// core never sleeps or retries internally.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("fetch failed for {reference}: {reason}")]
    Fetch {
        reference: ResourceRef,
        reason: String,
    },

    #[error("commit failed for {reference}: {reason}")]
    Commit {
        reference: ResourceRef,
        reason: String,
    },

    #[error("reconciliation cancelled for {reference}")]
    Cancelled { reference: ResourceRef },
}
