//! HTML output through a Handlebars template

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::paths::PathRecord;

const TEMPLATE_NAME: &str = "output-template";
const VAR_SEPARATOR: &str = ":::";

/// Built-in template: a table with one row per path.
pub const DEFAULT_TEMPLATE: &str = r#"
<table class="table table-striped">
<thead>
  <tr>
	<th>#</th>
	<th>Module</th>
	<th>Path</th>
	<th>Leaf Type</th>
  </tr>
</thead>
<tbody>
{{#each paths}}
<tr>
	<td>{{@index}}</td>
	<td>{{module}}</td>
	<td>{{xpath}}</td>
	<td>{{type.name}}</td>
  </tr>
{{/each}}
</tbody>
</table>
"#;

/// Data available to templates.
#[derive(Debug, Serialize)]
struct TemplateInput<'a> {
    paths: &'a [PathRecord],
    vars: BTreeMap<String, String>,
}

/// Parse `key:::value` template variables.
///
/// Everything after the first separator is the value, so values may
/// themselves contain `:::`. Entries without a separator are skipped.
pub fn parse_template_vars(vars: &[String]) -> BTreeMap<String, String> {
    let mut parsed = BTreeMap::new();
    for var in vars {
        match var.split_once(VAR_SEPARATOR) {
            Some((key, value)) => {
                parsed.insert(key.to_string(), value.to_string());
            }
            None => warn!("ignoring variable {}", var),
        }
    }
    parsed
}

/// Renders path records into an HTML template.
pub struct HtmlFormatter {
    template: Option<PathBuf>,
    vars: BTreeMap<String, String>,
}

impl HtmlFormatter {
    pub fn new(template: Option<PathBuf>, vars: &[String]) -> Self {
        Self {
            template,
            vars: parse_template_vars(vars),
        }
    }

    fn template_source(&self) -> Result<String> {
        match &self.template {
            Some(path) => read_template(path),
            None => Ok(DEFAULT_TEMPLATE.to_string()),
        }
    }

    /// Render the template once with all records to `out`.
    ///
    /// Nothing is written unless rendering succeeds.
    pub fn write<W: Write>(&self, records: &[PathRecord], mut out: W) -> Result<()> {
        let source = self.template_source()?;

        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(escape_html);
        handlebars.register_template_string(TEMPLATE_NAME, source)?;

        let input = TemplateInput {
            paths: records,
            vars: self.vars.clone(),
        };
        debug!(paths = records.len(), vars = input.vars.len(), "rendering template");
        let rendered = handlebars.render(TEMPLATE_NAME, &input)?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadTemplate {
        path: path.to_path_buf(),
        source,
    })
}

/// Escape text for HTML element and attribute content.
///
/// Narrower than Handlebars' default, which also escapes `=` and would
/// mangle list key predicates such as `[name=*]`.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
