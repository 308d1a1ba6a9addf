use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::trace;

use plo_model::{Annotations, Labels, ResourceRef, Revision, Snapshot};

use super::{CommitError, FetchError, ResourceAccessor};

/// Stored metadata for one workload unit.
#[derive(Debug, Clone)]
struct StoredObject {
    annotations: Annotations,
    labels: Labels,
    revision: Revision,
}

/// In-process resource store with compare-and-swap commits.
///
/// Reference [`ResourceAccessor`] implementation used by tests and demos.
/// Hosts mutate it through [`MemoryStore::put`] and [`MemoryStore::remove`],
/// which bump or drop revisions the way an external writer would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<ResourceRef, StoredObject>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite an object, as an external writer would.
    ///
    /// A new object starts at [`Revision::initial`]; overwriting an existing
    /// one bumps its revision, which invalidates in-flight snapshots.
    pub fn put(&self, reference: ResourceRef, annotations: Annotations, labels: Labels) {
        let mut objects = self.objects.lock().expect("store lock poisoned");
        let revision = match objects.get(&reference) {
            Some(existing) => existing.revision.bump(),
            None => Revision::initial(),
        };
        objects.insert(
            reference,
            StoredObject {
                annotations,
                labels,
                revision,
            },
        );
    }

    /// Delete an object. Deleting an absent reference is a no-op.
    pub fn remove(&self, reference: &ResourceRef) {
        let mut objects = self.objects.lock().expect("store lock poisoned");
        objects.remove(reference);
    }

    /// Read current labels without going through the accessor contract.
    pub fn labels(&self, reference: &ResourceRef) -> Option<Labels> {
        let objects = self.objects.lock().expect("store lock poisoned");
        objects.get(reference).map(|o| o.labels.clone())
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().expect("store lock poisoned").len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ResourceAccessor for MemoryStore {
    async fn fetch(&self, reference: &ResourceRef) -> Result<Snapshot, FetchError> {
        let objects = self.objects.lock().expect("store lock poisoned");
        let object = objects.get(reference).ok_or(FetchError::NotFound)?;

        trace!(resource = %reference, revision = ?object.revision, "fetched snapshot");
        Ok(Snapshot::new(
            reference.clone(),
            object.annotations.clone(),
            object.labels.clone(),
            object.revision,
        ))
    }

    async fn commit(&self, snapshot: Snapshot) -> Result<(), CommitError> {
        let mut objects = self.objects.lock().expect("store lock poisoned");
        let object = objects
            .get_mut(&snapshot.reference)
            .ok_or(CommitError::NotFound)?;

        if object.revision != snapshot.revision {
            return Err(CommitError::Conflict);
        }

        object.annotations = snapshot.annotations;
        object.labels = snapshot.labels;
        object.revision = object.revision.bump();
        trace!(resource = %snapshot.reference, revision = ?object.revision, "committed snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ResourceRef {
        ResourceRef::new("default", "web-1")
    }

    fn annotations() -> Annotations {
        let mut a = Annotations::new();
        a.insert("k", "v");
        a
    }

    #[tokio::test]
    async fn fetch_missing_object_is_not_found() {
        let store = MemoryStore::new();
        let res = store.fetch(&reference()).await;
        assert!(matches!(res, Err(FetchError::NotFound)));
    }

    #[tokio::test]
    async fn fetch_returns_stored_metadata() {
        let store = MemoryStore::new();
        store.put(reference(), annotations(), Labels::new());

        let snapshot = store.fetch(&reference()).await.unwrap();
        assert_eq!(snapshot.annotations.get("k"), Some("v"));
        assert_eq!(snapshot.revision, Revision::initial());
    }

    #[tokio::test]
    async fn commit_with_current_revision_succeeds_and_bumps() {
        let store = MemoryStore::new();
        store.put(reference(), annotations(), Labels::new());

        let mut snapshot = store.fetch(&reference()).await.unwrap();
        snapshot.set_label("app", "web");
        store.commit(snapshot).await.unwrap();

        let after = store.fetch(&reference()).await.unwrap();
        assert_eq!(after.labels.get("app"), Some("web"));
        assert_eq!(after.revision, Revision::initial().bump());
    }

    #[tokio::test]
    async fn commit_with_stale_revision_is_conflict() {
        let store = MemoryStore::new();
        store.put(reference(), annotations(), Labels::new());

        let stale = store.fetch(&reference()).await.unwrap();
        // Concurrent writer moves the revision forward.
        store.put(reference(), annotations(), Labels::new());

        let res = store.commit(stale).await;
        assert!(matches!(res, Err(CommitError::Conflict)));
    }

    #[tokio::test]
    async fn commit_after_delete_is_not_found() {
        let store = MemoryStore::new();
        store.put(reference(), annotations(), Labels::new());

        let snapshot = store.fetch(&reference()).await.unwrap();
        store.remove(&reference());

        let res = store.commit(snapshot).await;
        assert!(matches!(res, Err(CommitError::NotFound)));
    }

    #[tokio::test]
    async fn put_over_existing_object_bumps_revision() {
        let store = MemoryStore::new();
        store.put(reference(), annotations(), Labels::new());
        store.put(reference(), annotations(), Labels::new());

        let snapshot = store.fetch(&reference()).await.unwrap();
        assert_eq!(snapshot.revision, Revision::initial().bump());
    }
}
