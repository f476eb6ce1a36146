//! Schema tree to path list conversion
//!
//! `PathWalker` walks a module depth-first and emits one `PathRecord` per
//! leaf, carrying both the XPath and the RESTCONF form of its path together
//! with the leaf's type.

mod record;
mod style;
mod types;
mod walker;

pub use record::{PathAccumulator, PathRecord, PathStyle};
pub use style::{SegmentStyle, paint};
pub use types::render_type;
pub use walker::{PathWalker, WalkerConfig};
