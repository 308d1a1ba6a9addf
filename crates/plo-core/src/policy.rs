//! Convergence policy: the pure mapping from metadata to desired and actual
//! label state.
//!
//! Kept free of I/O so the whole contract can be table-tested. The
//! reconciler converges the store until
//! `actual_label_present == desired_label_present` holds.
use plo_model::{ANNOTATION_ADD_POD_NAME, Annotations, LABEL_POD_NAME, Labels};

/// Whether the pod-name label must be present.
///
/// True only when the marker annotation carries the exact literal `"true"`.
/// This is deliberately not a truthy parse: `"True"`, `"1"`, `"yes"` and an
/// absent annotation all mean the label must not be present.
pub fn desired_label_present(annotations: &Annotations) -> bool {
    annotations.get(ANNOTATION_ADD_POD_NAME) == Some("true")
}

/// Whether the pod-name label is present with the expected value.
///
/// A label naming a different resource counts as absent, so a stale value
/// gets rewritten rather than trusted.
pub fn actual_label_present(labels: &Labels, name: &str) -> bool {
    labels.get(LABEL_POD_NAME) == Some(name)
}
