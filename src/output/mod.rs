//! Path list formatting and display
//!
//! This module renders the records collected by `PathWalker`:
//! - `text` - one line per path with selectable fields and node filtering
//! - `html` - a Handlebars template, the built-in table or a user file
//! - `config` - output configuration types

mod config;
mod html;
mod text;

use std::io::Write;

pub use config::{NodeFilter, OutputConfig, OutputFormat, TypeDetail};
pub use html::{DEFAULT_TEMPLATE, HtmlFormatter, parse_template_vars};
pub use text::TextFormatter;

use crate::error::Result;
use crate::paths::PathRecord;

/// Render `records` to `out` in the configured format.
pub fn render<W: Write>(records: &[PathRecord], config: &OutputConfig, out: &mut W) -> Result<()> {
    match config.format {
        OutputFormat::Text => TextFormatter::new(config).write(records, out)?,
        OutputFormat::Html => {
            HtmlFormatter::new(config.template.clone(), &config.template_vars)
                .write(records, &mut *out)?
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::paths::{PathWalker, WalkerConfig};
    use crate::test_utils::interfaces_module;

    fn render_module(config: &OutputConfig) -> String {
        let records = PathWalker::new(WalkerConfig::default()).walk(&interfaces_module());
        let mut out = Vec::new();
        render(&records, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[derive(Default)]
    struct CountingWriter {
        buf: Vec<u8>,
        flushes: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_render_flushes_once() {
        let records = PathWalker::new(WalkerConfig::default()).walk(&interfaces_module());
        for format in [OutputFormat::Text, OutputFormat::Html] {
            let mut out = CountingWriter::default();
            let config = OutputConfig {
                format,
                ..Default::default()
            };
            render(&records, &config, &mut out).unwrap();
            assert_eq!(out.flushes, 1, "{:?}", format);
            assert!(!out.buf.is_empty());
        }
    }

    #[test]
    fn test_render_text_xpath() {
        let output = render_module(&OutputConfig::default());
        assert!(
            output.contains("[rw]  /interfaces/interface[name=*]/config/mtu  uint16"),
            "{}",
            output
        );
        assert!(output.contains(
            "[ro]  /interfaces/interface[name=*]/state/oper-status  oper-status\"[UP,DOWN,TESTING]\""
        ));
    }

    #[test]
    fn test_render_text_restconf_state_only() {
        let output = render_module(&OutputConfig {
            style: crate::paths::PathStyle::Restconf,
            only_nodes: NodeFilter::State,
            node_state: false,
            types: TypeDetail::No,
            ..Default::default()
        });
        for line in output.lines() {
            assert!(line.contains("/state/"), "unexpected line {}", line);
        }
        assert!(output.contains("/interfaces/interface=name/state/counters/in-octets"));
    }

    #[test]
    fn test_render_html_rows() {
        let records = PathWalker::new(WalkerConfig::default()).walk(&interfaces_module());
        let output = render_module(&OutputConfig {
            format: OutputFormat::Html,
            ..Default::default()
        });
        assert!(output.contains("<table"));
        assert_eq!(output.matches("<tr>").count(), records.len() + 1);
    }
}
