//! YANG schema tree input
//!
//! The schema tree is produced by an external YANG compiler and handed to
//! yangpath as a JSON document. This module provides:
//!
//! - `SchemaNode` / `NodeKind`: the typed node tree
//! - `TypeDescriptor` / `TypeKind`: leaf value types
//! - `ConfigState`: the tri-state config flag
//! - `load_module` and `ModuleLocator`: reading modules from disk

mod loader;
mod node;
mod types;

pub use loader::{ModuleLocator, load_module, parse_module};
pub use node::{ConfigState, NodeKind, SchemaNode};
pub use types::{TypeDescriptor, TypeKind};
