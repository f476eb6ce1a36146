//! yangpath - export XPath and RESTCONF paths from YANG schema trees

pub mod error;
pub mod output;
pub mod paths;
pub mod schema;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{
    HtmlFormatter, NodeFilter, OutputConfig, OutputFormat, TextFormatter, TypeDetail,
    parse_template_vars, render,
};
pub use paths::{PathAccumulator, PathRecord, PathStyle, PathWalker, WalkerConfig, render_type};
pub use schema::{
    ConfigState, ModuleLocator, NodeKind, SchemaNode, TypeDescriptor, TypeKind, load_module,
};
