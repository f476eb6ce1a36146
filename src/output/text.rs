//! Plain text output, one path per line

use std::io::{self, Write};

use crate::paths::PathRecord;

use super::config::{OutputConfig, TypeDetail};

const FIELD_SEPARATOR: &str = "  ";

/// Writes path records as lines of space separated fields:
/// module, node state, path and type, each optional except the path.
pub struct TextFormatter<'a> {
    config: &'a OutputConfig,
}

impl<'a> TextFormatter<'a> {
    pub fn new(config: &'a OutputConfig) -> Self {
        Self { config }
    }

    /// Format a single record, or `None` if the node filter excludes it.
    pub fn format_line(&self, record: &PathRecord) -> Option<String> {
        if !self.config.only_nodes.includes(record.config) {
            return None;
        }

        let mut fields: Vec<&str> = Vec::with_capacity(4);
        if self.config.with_module {
            fields.push(&record.module);
        }
        if self.config.node_state {
            fields.push(record.config.marker());
        }
        fields.push(record.path(self.config.style));
        match self.config.types {
            TypeDetail::No => {}
            TypeDetail::Yes => fields.push(&record.leaf_type.name),
            TypeDetail::Detailed => fields.push(&record.stype),
        }
        Some(fields.join(FIELD_SEPARATOR))
    }

    pub fn write<W: Write>(&self, records: &[PathRecord], out: &mut W) -> io::Result<()> {
        for line in records.iter().filter_map(|r| self.format_line(r)) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
