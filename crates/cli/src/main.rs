use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dotstyle::{attrs, Engine, GraphKind, GraphSeeder, Renderer, RendererConfig, StoreRepr, StyleStore};
use petgraph::graphmap::GraphMap;
use petgraph::{Directed, EdgeType, Undirected};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// =============================================================================
// Arguments
// =============================================================================

/// Emit, display and render styled DOT graphs.
#[derive(Parser, Debug)]
#[command(name = "dotstyle", version)]
struct Cli {
    /// Renderer configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the DOT document, or save it with --output
    Emit {
        #[command(flatten)]
        input: InputArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the graph as an image named <OUTPUT>.<FORMAT>
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output path without extension
        #[arg(short, long, default_value = "out")]
        output: PathBuf,

        /// Image format passed to -T
        #[arg(short, long, default_value = "gif")]
        format: String,

        /// Layout engine: dot or neato
        #[arg(long, default_value = "dot")]
        engine: Engine,

        #[command(flatten)]
        programs: ProgramArgs,
    },

    /// Open the graph in the interactive viewer
    Display {
        #[command(flatten)]
        input: InputArgs,

        /// Layout engine: dot or neato
        #[arg(long, default_value = "dot")]
        engine: Engine,

        #[command(flatten)]
        programs: ProgramArgs,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Store document (JSON), or an edge list with --edges
    input: PathBuf,

    /// Read INPUT as an edge list: one `head tail` pair or lone node per line
    #[arg(long)]
    edges: bool,

    /// Treat the edge list as undirected
    #[arg(long)]
    undirected: bool,

    /// Graph name for edge lists
    #[arg(long, default_value = "G")]
    name: String,
}

#[derive(Args, Debug, Default)]
struct ProgramArgs {
    /// Direct renderer command
    #[arg(long)]
    dot: Option<String>,

    /// Interactive viewer command
    #[arg(long)]
    dotty: Option<String>,

    /// Layout engine command
    #[arg(long)]
    neato: Option<String>,
}

impl ProgramArgs {
    fn apply(self, config: &mut RendererConfig) {
        if let Some(dot) = self.dot {
            config.dot = dot;
        }
        if let Some(dotty) = self.dotty {
            config.dotty = dotty;
        }
        if let Some(neato) = self.neato {
            config.neato = neato;
        }
    }
}

// =============================================================================
// Input loading
// =============================================================================

fn load_store(args: &InputArgs) -> Result<StyleStore> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    if !args.edges {
        let repr = StoreRepr::from_json_str(&text)
            .with_context(|| format!("Failed to parse store document {}", args.input.display()))?;
        return Ok(repr.into_store()?);
    }

    if args.undirected {
        seed_edge_list::<Undirected>(&text, &args.name, GraphKind::Undirected)
    } else {
        seed_edge_list::<Directed>(&text, &args.name, GraphKind::Directed)
    }
}

/// Build a store from an edge list. Blank lines and `#` comments are ignored.
fn seed_edge_list<Ty: EdgeType>(text: &str, name: &str, kind: GraphKind) -> Result<StyleStore> {
    let mut graph: GraphMap<&str, (), Ty> = GraphMap::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(node), None, None) => {
                graph.add_node(node);
            }
            (Some(head), Some(tail), None) => {
                graph.add_edge(head, tail, ());
            }
            _ => bail!(
                "line {}: expected `head tail` or a single node, found {:?}",
                lineno + 1,
                line
            ),
        }
    }

    // An undirected map reports every edge from both ends; keep the first.
    let mut emitted: HashSet<(&str, &str)> = HashSet::new();
    let directed = Ty::is_directed();
    let seeded = GraphSeeder::<&str>::new()
        .edge_visitor(move |head, tail| {
            if !directed && emitted.contains(&(*tail, *head)) {
                return None;
            }
            emitted.insert((*head, *tail));
            Some(attrs! {})
        })
        .build(&graph, name, kind)?;

    debug!(
        nodes = seeded.node_count(),
        edges = seeded.edge_count(),
        "seeded store from edge list"
    );
    Ok(StoreRepr::from(&seeded).into_store()?)
}

fn renderer_config(path: Option<&Path>, programs: ProgramArgs) -> Result<RendererConfig> {
    let mut config = match path {
        Some(path) => RendererConfig::load(path)
            .with_context(|| format!("Failed to load renderer config {}", path.display()))?,
        None => RendererConfig::default(),
    };
    programs.apply(&mut config);
    Ok(config)
}

// =============================================================================
// Entry point
// =============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Emit { input, output } => {
            let store = load_store(&input)?;
            match output {
                Some(path) => store.save_to_file(&path)?,
                None => {
                    let stdout = std::io::stdout();
                    let mut handle = stdout.lock();
                    store.write_to(&mut handle)?;
                    handle.flush()?;
                }
            }
        }
        Commands::Render {
            input,
            output,
            format,
            engine,
            programs,
        } => {
            let store = load_store(&input)?;
            let mut renderer = Renderer::new(renderer_config(config_path, programs)?);
            let image = renderer.render_to_image(&store, &output, &format, engine)?;
            info!(image = %image.display(), "render requested");
            println!("{}", image.display());
        }
        Commands::Display {
            input,
            engine,
            programs,
        } => {
            let store = load_store(&input)?;
            let mut renderer = Renderer::new(renderer_config(config_path, programs)?);
            renderer.display(&store, engine)?;
        }
    }

    Ok(())
}
