//! Read-modify-write access to the resource store.
//!
//! The store itself (an API server, a database, the in-process
//! [`MemoryStore`]) lives behind [`ResourceAccessor`]. Error classification
//! is part of the trait contract: implementations return tagged kinds
//! rather than leaving the caller to inspect error types.
mod memory;
pub use memory::MemoryStore;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use plo_model::{ResourceRef, Snapshot};

/// Why a fetch did not produce a snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The resource does not exist. Not an error for a level-based loop;
    /// the reconciler treats it as already converged.
    #[error("resource not found")]
    NotFound,

    /// The store could not be reached or answered abnormally.
    #[error("transient fetch failure: {0}")]
    Transient(String),
}

/// Why a commit was rejected.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The resource was deleted between fetch and commit.
    #[error("resource not found")]
    NotFound,

    /// The store's revision moved past the snapshot's revision.
    #[error("revision conflict")]
    Conflict,

    /// The store could not be reached or answered abnormally.
    #[error("transient commit failure: {0}")]
    Transient(String),
}

/// Store access consumed by the reconciler.
///
/// `commit` uses compare-and-swap semantics on [`plo_model::Revision`]: it
/// succeeds only while the store's current token still equals the one
/// carried by the snapshot, and bumps the token on success.
#[async_trait]
pub trait ResourceAccessor: Send + Sync {
    /// Read the current snapshot for a reference.
    async fn fetch(&self, reference: &ResourceRef) -> Result<Snapshot, FetchError>;

    /// Submit a mutated snapshot under its fetch-time revision.
    async fn commit(&self, snapshot: Snapshot) -> Result<(), CommitError>;
}

/// Shared handle to a resource accessor.
///
/// Injected into [`crate::reconciler::Reconciler`] at construction time.
pub type AccessorHandle = Arc<dyn ResourceAccessor>;
