//! Well-known metadata keys that form the on-cluster contract.
//!
//! These strings are part of the wire contract between the operator and
//! whoever annotates workload units. Keeping them here avoids scattering
//! magic strings throughout the codebase.

/// Annotation key that requests the pod-name label.
///
/// Desired state is "label present" only when the annotation value is the
/// exact literal `"true"`. Any other value, including an absent annotation,
/// means the label must not be present.
pub const ANNOTATION_ADD_POD_NAME: &str = "plo.io/add-pod-name-label";

/// Label key managed by the reconciler.
///
/// When present, its value always equals the resource name. The reconciler
/// removes the key entirely rather than setting it to an empty value.
pub const LABEL_POD_NAME: &str = "plo.io/pod-name";
