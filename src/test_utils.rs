//! Test utilities: sample schema trees and temporary schema directories.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::schema::{SchemaNode, TypeDescriptor};

/// A small interfaces model covering every node kind and type decoration.
///
/// ```text
/// module acme-interfaces
///   container interfaces (config true)
///     list interface [name]
///       leaf name -> leafref ../config/name
///       container config
///         leaf name, mtu, type (identityref), enabled
///         leaf-list aliases
///       container state (config false)
///         leaf oper-status (enumeration typedef), mtu, address (union)
///         container counters: in-octets, out-octets
/// ```
pub fn interfaces_module() -> SchemaNode {
    let config = SchemaNode::container("config")
        .with_child(SchemaNode::leaf("name", TypeDescriptor::plain("string")))
        .with_child(SchemaNode::leaf("mtu", TypeDescriptor::plain("uint16")))
        .with_child(SchemaNode::leaf(
            "type",
            TypeDescriptor::identityref("interface-type"),
        ))
        .with_child(SchemaNode::leaf("enabled", TypeDescriptor::plain("boolean")))
        .with_child(SchemaNode::leaf_list(
            "aliases",
            TypeDescriptor::plain("string"),
        ));

    let counters = SchemaNode::container("counters")
        .with_child(SchemaNode::leaf("in-octets", TypeDescriptor::plain("counter64")))
        .with_child(SchemaNode::leaf("out-octets", TypeDescriptor::plain("counter64")));

    let state = SchemaNode::container("state")
        .with_config(false)
        .with_child(SchemaNode::leaf(
            "oper-status",
            TypeDescriptor::enumeration(["UP", "DOWN", "TESTING"]).named("oper-status"),
        ))
        .with_child(SchemaNode::leaf("mtu", TypeDescriptor::plain("uint16")))
        .with_child(SchemaNode::leaf(
            "address",
            TypeDescriptor::union(vec![
                TypeDescriptor::plain("ip-address"),
                TypeDescriptor::enumeration(["dhcp", "none"]),
            ]),
        ))
        .with_child(counters);

    let interface = SchemaNode::list("interface", ["name"])
        .with_child(SchemaNode::leaf(
            "name",
            TypeDescriptor::leafref("../config/name"),
        ))
        .with_child(config)
        .with_child(state);

    SchemaNode::module("acme-interfaces").with_child(
        SchemaNode::container("interfaces")
            .with_config(true)
            .with_child(interface),
    )
}

/// A wide and deep synthetic module: `width` containers per level, `depth`
/// levels, each container holding a keyed list with three leaves.
pub fn synthetic_module(width: usize, depth: usize) -> SchemaNode {
    fn level(name: String, width: usize, depth: usize) -> SchemaNode {
        let list = SchemaNode::list(format!("{}-entry", name), ["id", "index"])
            .with_child(SchemaNode::leaf("id", TypeDescriptor::plain("uint32")))
            .with_child(SchemaNode::leaf("index", TypeDescriptor::plain("uint32")))
            .with_child(SchemaNode::leaf(
                "ref",
                TypeDescriptor::union(vec![
                    TypeDescriptor::identityref("base-id"),
                    TypeDescriptor::enumeration(["a", "b", "c"]),
                ]),
            ));
        let mut node = SchemaNode::container(name.clone()).with_child(list);
        if depth > 0 {
            for i in 0..width {
                node = node.with_child(level(format!("{}-{}", name, i), width, depth - 1));
            }
        }
        node
    }

    let mut root = SchemaNode::module("synthetic");
    for i in 0..width {
        root = root.with_child(level(format!("c{}", i), width, depth));
    }
    root
}

/// A temporary directory holding compiled schema files.
///
/// The directory is removed when dropped.
pub struct SchemaDir {
    dir: TempDir,
}

impl SchemaDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Serialize `module` to `path` (relative to the directory).
    pub fn add_module(&self, path: &str, module: &SchemaNode) -> PathBuf {
        let json = serde_json::to_string_pretty(module).expect("Failed to serialize module");
        self.add_file(path, &json)
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for SchemaDir {
    fn default() -> Self {
        Self::new()
    }
}
