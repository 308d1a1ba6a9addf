pub mod accessor;
pub mod binding;
pub mod error;
pub mod policy;
pub mod reconciler;

pub mod prelude {
    pub use crate::accessor::{AccessorHandle, CommitError, FetchError, ResourceAccessor};
    pub use crate::binding::{Binding, Requeue, WORKLOAD_UNIT_KIND};
    pub use crate::error::ReconcileError;
    pub use crate::reconciler::{Disposition, Reconciler};
}
