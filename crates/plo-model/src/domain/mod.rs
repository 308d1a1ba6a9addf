mod annotations;
mod constants;
mod labels;
mod reference;
mod revision;

pub use annotations::Annotations;
pub use constants::{ANNOTATION_ADD_POD_NAME, LABEL_POD_NAME};
pub use labels::Labels;
pub use reference::ResourceRef;
pub use revision::Revision;
