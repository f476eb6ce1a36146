//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("cannot read schema '{}': {source}", path.display())]
    ReadSchema {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid schema '{}': {source}", path.display())]
    ParseSchema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no YANG modules found by the path specified: '{}' has a {kind} at its root", path.display())]
    NotAModule { path: PathBuf, kind: String },

    #[error("module '{module}' not found in search directories {dirs:?}")]
    ModuleNotFound { module: String, dirs: Vec<PathBuf> },

    #[error("cannot read template '{}': {source}", path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}
