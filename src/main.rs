//! CLI entry point for yangpath

use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use yangpath::{
    ModuleLocator, NodeFilter, OutputConfig, OutputFormat, PathStyle, PathWalker, TypeDetail,
    WalkerConfig, load_module, render,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "yangpath")]
#[command(about = "Export XPath and RESTCONF paths from YANG schema trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export paths from a given YANG module
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Compiled module to export: a schema file, or a module name looked up in --yang-dir
    #[arg(short = 'm', long = "module")]
    module: String,

    /// Directories with compiled modules (can be used multiple times)
    #[arg(short = 'y', long = "yang-dir", default_value = "./")]
    yang_dir: Vec<PathBuf>,

    /// Paths output format
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: OutputFormat,

    /// Style of the path
    #[arg(short = 's', long = "style", default_value = "xpath")]
    style: PathStyle,

    /// Print module name
    #[arg(long = "with-module")]
    with_module: bool,

    /// Print node state ([rw]/[ro])
    #[arg(long = "node-state", default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    node_state: bool,

    /// Display only nodes of the given type
    #[arg(short = 'o', long = "only-nodes", default_value = "all")]
    only_nodes: NodeFilter,

    /// Display path type information
    #[arg(long = "types", default_value = "detailed")]
    types: TypeDetail,

    /// HTML template to use instead of the default one
    #[arg(long = "template", value_name = "FILE")]
    template: Option<PathBuf>,

    /// Extra template variables as key:::value pairs (can be used multiple times)
    #[arg(long = "template-vars", value_name = "KEY:::VALUE")]
    template_vars: Vec<String>,

    /// Disable colored terminal output
    #[arg(long = "no-color")]
    no_color: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", conflicts_with = "no_color")]
    color: ColorMode,
}

impl ExportArgs {
    fn use_color(&self) -> bool {
        // Escape codes would end up inside the HTML
        if self.no_color || matches!(self.format, OutputFormat::Html) {
            return false;
        }
        should_use_color(self.color)
    }

    fn output_config(&self) -> OutputConfig {
        OutputConfig {
            format: self.format,
            style: self.style,
            with_module: self.with_module,
            node_state: self.node_state,
            only_nodes: self.only_nodes,
            types: self.types,
            template: self.template.clone(),
            template_vars: self.template_vars.clone(),
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn export(args: &ExportArgs) -> yangpath::Result<()> {
    let locator = ModuleLocator::new(args.yang_dir.clone());
    let schema_path = locator.locate(&args.module)?;
    let module = load_module(&schema_path)?;

    let walker = PathWalker::new(WalkerConfig {
        use_color: args.use_color(),
    });
    let records = walker.walk(&module);
    debug!(
        "exporting {} paths from module {} as {:?}",
        records.len(),
        module.name,
        args.format
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&records, &args.output_config(), &mut out)
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Export(args) => export(args),
    };

    if let Err(e) = result {
        eprintln!("yangpath: {}", e);
        process::exit(1);
    }
}
