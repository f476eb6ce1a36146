//! Loading compiled modules from disk

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::{Error, Result};

use super::node::{NodeKind, SchemaNode};

const SCHEMA_EXTENSION: &str = "json";

/// Read a compiled module tree from a JSON file.
///
/// The root of the document must be a module node.
pub fn load_module(path: &Path) -> Result<SchemaNode> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadSchema {
        path: path.to_path_buf(),
        source,
    })?;
    parse_module(&content, path)
}

/// Parse a compiled module tree from JSON text. `path` is only used for errors.
pub fn parse_module(content: &str, path: &Path) -> Result<SchemaNode> {
    let root: SchemaNode = serde_json::from_str(content).map_err(|source| Error::ParseSchema {
        path: path.to_path_buf(),
        source,
    })?;
    if !root.is_module() {
        return Err(Error::NotAModule {
            path: path.to_path_buf(),
            kind: kind_name(&root.kind).to_string(),
        });
    }
    debug!(
        module = %root.name,
        leaves = root.leaf_count(),
        "loaded module from {}",
        path.display()
    );
    Ok(root)
}

fn kind_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Module => "module",
        NodeKind::Container => "container",
        NodeKind::List { .. } => "list",
        NodeKind::LeafList { .. } => "leaf-list",
        NodeKind::Leaf { .. } => "leaf",
        NodeKind::Other => "non-data node",
    }
}

/// Resolves a module argument to a schema file, looking through search directories.
#[derive(Debug, Clone)]
pub struct ModuleLocator {
    search_dirs: Vec<PathBuf>,
}

impl ModuleLocator {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Find the schema file for `module`.
    ///
    /// An existing file path is returned as is. Otherwise the search
    /// directories are walked for `<name>.json`; revisioned files
    /// (`<name>@<revision>.json`) are only used when no bare file exists,
    /// in which case the latest revision wins.
    pub fn locate(&self, module: &str) -> Result<PathBuf> {
        let direct = Path::new(module);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }

        let name = module_name(module);
        let mut latest_revision: Option<(String, PathBuf)> = None;

        for dir in &self.search_dirs {
            let walker = WalkBuilder::new(dir)
                .hidden(true)
                .ignore(true)
                .git_ignore(true)
                .git_global(false)
                .git_exclude(false)
                .sort_by_file_name(|a, b| a.cmp(b))
                .build();

            for entry in walker.flatten() {
                let path = entry.path();
                if !path.is_file() {
                    continue;
                }
                let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                match match_module_file(file_name, name) {
                    Some(ModuleFile::Bare) => {
                        debug!("module '{}' resolved to {}", name, path.display());
                        return Ok(path.to_path_buf());
                    }
                    Some(ModuleFile::Revision(rev)) => {
                        if latest_revision.as_ref().is_none_or(|(r, _)| rev > r.as_str()) {
                            latest_revision = Some((rev.to_string(), path.to_path_buf()));
                        }
                    }
                    None => {}
                }
            }
        }

        match latest_revision {
            Some((rev, path)) => {
                debug!(
                    "module '{}' resolved to revision {} at {}",
                    name,
                    rev,
                    path.display()
                );
                Ok(path)
            }
            None => Err(Error::ModuleNotFound {
                module: name.to_string(),
                dirs: self.search_dirs.clone(),
            }),
        }
    }
}

enum ModuleFile<'a> {
    Bare,
    Revision(&'a str),
}

/// Strip any directory and `.json` extension from a module argument.
fn module_name(module: &str) -> &str {
    let base = module.rsplit('/').next().unwrap_or(module);
    base.strip_suffix(".json").unwrap_or(base)
}

fn match_module_file<'a>(file_name: &'a str, name: &str) -> Option<ModuleFile<'a>> {
    let stem = file_name.strip_suffix(SCHEMA_EXTENSION)?.strip_suffix('.')?;
    if stem == name {
        return Some(ModuleFile::Bare);
    }
    let (module, revision) = stem.split_once('@')?;
    (module == name && !revision.is_empty()).then_some(ModuleFile::Revision(revision))
}
