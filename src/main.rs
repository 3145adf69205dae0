//! hierarchy-flow CLI entry point.
//!
//! Reads an application document (file or stdin) and prints the diagram
//! JSON, an outline, or the inspector record of a single node.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use hierarchy_flow::build_diagram;
use hierarchy_flow::config::LayoutConfig;
use hierarchy_flow::renderers::json::details_json;
use hierarchy_flow::renderers::{JsonRenderer, OutlineRenderer, Renderer};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Outline,
}

/// Agent hierarchy JSON to positioned node/edge diagram data.
#[derive(Parser, Debug)]
#[command(
    name = "hierarchy-flow",
    version = env!("HIERARCHY_FLOW_VERSION"),
    about = "Agent hierarchy JSON to positioned node/edge diagram data"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Print the inspector record of this node id instead of the diagram
    #[arg(long = "details", value_name = "ID")]
    details: Option<String>,

    /// Fail if the edges do not form a single tree over the visible nodes
    #[arg(long = "check")]
    check: bool,

    /// x of the first API node
    #[arg(long = "start-x")]
    start_x: Option<f64>,

    /// Horizontal distance between API nodes
    #[arg(long = "api-spacing")]
    api_spacing: Option<f64>,

    /// Vertical distance between levels
    #[arg(long = "vertical-spacing")]
    vertical_spacing: Option<f64>,

    /// Root x when the document has no teams
    #[arg(long = "center-x")]
    center_x: Option<f64>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log pipeline progress to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn layout_config(&self) -> LayoutConfig {
        let defaults = LayoutConfig::default();
        LayoutConfig {
            start_x: self.start_x.unwrap_or(defaults.start_x),
            api_spacing: self.api_spacing.unwrap_or(defaults.api_spacing),
            vertical_spacing: self.vertical_spacing.unwrap_or(defaults.vertical_spacing),
            center_x: self.center_x.unwrap_or(defaults.center_x),
        }
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => fail(format!("cannot read '{}': {}", path, e)),
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let diagram = match build_diagram(&text, &cli.layout_config()) {
        Ok(d) => d,
        Err(e) => fail(e),
    };

    if cli.check {
        let graph = diagram.graph();
        if !graph.is_tree() {
            warn!(orphans = ?graph.orphans(), dangling = ?graph.dangling, "edge check failed");
            fail("diagram edges do not form a tree over the visible nodes");
        }
        debug!(nodes = graph.node_count(), edges = graph.edge_count(), "edge check passed");
    }

    let rendered = if let Some(ref id) = cli.details {
        let Some(record) = diagram.inspect(id) else {
            fail(format!("no visible node with id '{}'", id));
        };
        details_json(&record, cli.pretty)
    } else {
        match cli.format {
            Format::Json => JsonRenderer::new(cli.pretty).render(&diagram),
            Format::Outline => OutlineRenderer::default().render(&diagram),
        }
    };
    let mut rendered = match rendered {
        Ok(s) => s,
        Err(e) => fail(e),
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
