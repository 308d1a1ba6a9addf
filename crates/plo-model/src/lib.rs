mod domain;
pub use domain::{ANNOTATION_ADD_POD_NAME, LABEL_POD_NAME};
pub use domain::{Annotations, Labels, ResourceRef, Revision};

mod error;
pub use error::{ModelError, ModelResult};

mod snapshot;
pub use snapshot::Snapshot;
