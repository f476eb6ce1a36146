//! Path accumulator and path records

use clap::ValueEnum;
use serde::Serialize;

use crate::schema::{ConfigState, TypeDescriptor};

/// Path state built on the way from the module root down to the current node.
///
/// Passed down the walk by value: every child works on its own copy, so
/// siblings never see each other's segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathAccumulator {
    pub module: String,
    pub xpath: String,
    pub restconf: String,
    pub config: ConfigState,
}

impl PathAccumulator {
    /// Apply a node's `config` statement; unset keeps the inherited state.
    pub fn inherit_config(&mut self, config: ConfigState) {
        if config.is_set() {
            self.config = config;
        }
    }

    /// Append a `/name` segment to both path styles.
    pub fn push_segment(&mut self, name: &str) {
        self.xpath.push('/');
        self.xpath.push_str(name);
        self.restconf.push('/');
        self.restconf.push_str(name);
    }

    /// Finish the path of a leaf into a record.
    pub fn into_record(self, leaf_type: TypeDescriptor, stype: String) -> PathRecord {
        PathRecord {
            module: self.module,
            xpath: self.xpath,
            restconf: self.restconf,
            stype,
            leaf_type,
            config: self.config,
        }
    }
}

/// A fully resolved path to one leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRecord {
    pub module: String,
    pub xpath: String,
    pub restconf: String,
    /// Detailed type string (see `render_type`).
    pub stype: String,
    #[serde(rename = "type")]
    pub leaf_type: TypeDescriptor,
    pub config: ConfigState,
}

impl PathRecord {
    pub fn path(&self, style: PathStyle) -> &str {
        match style {
            PathStyle::Xpath => &self.xpath,
            PathStyle::Restconf => &self.restconf,
        }
    }
}

/// Path addressing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PathStyle {
    /// `/a/list[key=*]/leaf`
    #[default]
    Xpath,
    /// `/a/list=key/leaf`
    Restconf,
}
