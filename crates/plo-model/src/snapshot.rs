use serde::{Deserialize, Serialize};

use crate::domain::{Annotations, Labels, ResourceRef, Revision};

/// Point-in-time read of a workload unit's metadata.
///
/// A snapshot is owned by exactly one reconciliation attempt. It carries the
/// [`Revision`] observed at fetch time; a commit built from this snapshot is
/// rejected once the store has moved past that revision. After a commit
/// attempt the snapshot is spent — any further work starts from a fresh
/// fetch, never from mutating this value again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Identifier of the resource this snapshot was read from.
    pub reference: ResourceRef,
    /// Annotations at fetch time. Read-only as far as the core is concerned.
    pub annotations: Annotations,
    /// Labels at fetch time. The reconciler mutates these before a commit.
    pub labels: Labels,
    /// Optimistic-concurrency token observed at fetch time.
    pub revision: Revision,
}

impl Snapshot {
    /// Create a snapshot from its parts.
    pub fn new(
        reference: ResourceRef,
        annotations: Annotations,
        labels: Labels,
        revision: Revision,
    ) -> Self {
        Self {
            reference,
            annotations,
            labels,
            revision,
        }
    }

    /// Resource name, for convenience at call sites that only need the name.
    pub fn name(&self) -> &str {
        self.reference.name()
    }

    /// Insert or overwrite a label.
    pub fn set_label<K, V>(&mut self, key: K, val: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.labels.insert(key, val);
    }

    /// Remove a label entirely. Removing an absent key is a no-op.
    pub fn remove_label(&mut self, key: &str) {
        self.labels.remove(key);
    }
}
