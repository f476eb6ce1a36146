//! Terminal decoration of path segments
//!
//! Decoration is baked into the path strings while walking, so it is
//! produced through termcolor's ANSI writer rather than a live terminal.

use std::io::{self, Write};

use termcolor::{Ansi, ColorSpec, WriteColor};

/// How a path fragment should be decorated on a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    /// List keys
    Key,
    /// Leaf type strings
    Type,
}

impl SegmentStyle {
    fn spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            SegmentStyle::Key => spec.set_bold(true),
            SegmentStyle::Type => spec.set_dimmed(true),
        };
        spec
    }
}

/// Return `text` wrapped in the escape codes for `style` when `enabled`,
/// or unchanged otherwise.
pub fn paint(text: &str, style: SegmentStyle, enabled: bool) -> String {
    if !enabled || text.is_empty() {
        return text.to_string();
    }
    // Writing into memory only fails on exhausted allocation.
    write_styled(text, style).unwrap_or_else(|_| text.to_string())
}

fn write_styled(text: &str, style: SegmentStyle) -> io::Result<String> {
    let mut out = Ansi::new(Vec::with_capacity(text.len() + 12));
    out.set_color(&style.spec())?;
    out.write_all(text.as_bytes())?;
    out.reset()?;
    String::from_utf8(out.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
