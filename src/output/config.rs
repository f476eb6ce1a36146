//! Output configuration types

use std::path::PathBuf;

use clap::ValueEnum;

use crate::paths::PathStyle;
use crate::schema::ConfigState;

/// Output format of the exported paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Text,
    /// Render an HTML template
    Html,
}

/// Which nodes to include in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NodeFilter {
    #[default]
    All,
    /// Only read-write nodes
    Config,
    /// Only read-only nodes (and nodes with no config statement anywhere above them)
    State,
}

impl NodeFilter {
    pub fn includes(self, config: ConfigState) -> bool {
        match self {
            NodeFilter::All => true,
            NodeFilter::Config => config == ConfigState::True,
            NodeFilter::State => config != ConfigState::True,
        }
    }
}

/// How much type information to show in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TypeDetail {
    No,
    /// Bare type name
    Yes,
    /// Type name with identity base, leafref target, enum and union members
    #[default]
    Detailed,
}

/// Configuration for rendering path records.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub style: PathStyle,
    /// Prefix each line with the module name
    pub with_module: bool,
    /// Prefix each line with `[rw]`/`[ro]`
    pub node_state: bool,
    pub only_nodes: NodeFilter,
    pub types: TypeDetail,
    /// Custom HTML template; the built-in table is used when unset
    pub template: Option<PathBuf>,
    /// Extra template variables as `key:::value`
    pub template_vars: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            style: PathStyle::Xpath,
            with_module: false,
            node_state: true,
            only_nodes: NodeFilter::All,
            types: TypeDetail::Detailed,
            template: None,
            template_vars: Vec::new(),
        }
    }
}
