use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use plo_core::accessor::MemoryStore;
use plo_core::prelude::*;
use plo_model::{ANNOTATION_ADD_POD_NAME, Annotations, LABEL_POD_NAME, Labels, ResourceRef};
use plo_observe::{LoggerConfig, LoggerLevel, init_logger};

/// How often a signal may bounce through backoff before the demo gives up.
const MAX_BACKOFF_ATTEMPTS: u32 = 5;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LoggerConfig {
        level: LoggerLevel::new("debug")?,
        ..Default::default()
    };
    init_logger(&cfg)?;
    info!("logger initialized");

    // 2) resource store seeded with workload units in various states
    let store = Arc::new(MemoryStore::new());

    // wants the label, does not have it yet
    let web_1 = ResourceRef::new("default", "web-1");
    let mut annotations = Annotations::new();
    annotations.insert(ANNOTATION_ADD_POD_NAME, "true");
    store.put(web_1.clone(), annotations, Labels::new());

    // opted out, but carries a stale label that must be removed
    let web_2 = ResourceRef::new("default", "web-2");
    let mut annotations = Annotations::new();
    annotations.insert(ANNOTATION_ADD_POD_NAME, "false");
    let mut labels = Labels::new();
    labels.insert(LABEL_POD_NAME, "web-2");
    store.put(web_2.clone(), annotations, labels);

    // unannotated, already converged
    let web_3 = ResourceRef::new("default", "web-3");
    store.put(web_3.clone(), Annotations::new(), Labels::new());

    info!(objects = store.len(), "store seeded");

    // 3) reconciler bound to the workload-unit kind
    let reconciler = Arc::new(Reconciler::new(store.clone()));
    let binding = Binding::workload_units(reconciler);
    info!(kind = binding.kind(), "reconciler bound");

    // 4) change signal source: at-least-once, so deliveries are duplicated
    //    and a signal for a deleted resource is included on purpose
    let gone = ResourceRef::new("default", "gone");
    let (tx, mut rx) = mpsc::channel::<ResourceRef>(16);
    for reference in [
        web_1.clone(),
        web_2.clone(),
        web_1.clone(),
        web_3.clone(),
        gone,
        web_2.clone(),
    ] {
        tx.send(reference).await?;
    }
    drop(tx);

    // 5) dispatch loop: one signal at a time, honoring the requeue feedback
    let cancel = CancellationToken::new();
    while let Some(reference) = rx.recv().await {
        let mut attempts = 0;
        loop {
            match binding.handle(&reference, &cancel).await {
                Requeue::No => break,
                Requeue::Immediate => continue,
                Requeue::Backoff => {
                    attempts += 1;
                    if attempts >= MAX_BACKOFF_ATTEMPTS {
                        warn!(resource = %reference, "giving up after repeated failures");
                        break;
                    }
                    tokio::time::sleep(Duration::from_millis(100 * u64::from(attempts))).await;
                }
            }
        }
    }

    // 6) final state
    for reference in [web_1, web_2, web_3] {
        let labels = store.labels(&reference);
        info!(resource = %reference, labels = ?labels, "final state");
    }
    Ok(())
}
