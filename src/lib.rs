//! # dotstyle
//!
//! Styled DOT output for graphs, and a thin bridge to the Graphviz programs
//! that lay them out and draw them.
//!
//! ## Features
//!
//! - **Style store**: graph, node and edge attributes in an insertion-ordered
//!   [`StyleStore`]; styling a node is what declares it
//! - **Seeding**: fill a store from any [`GraphSource`] (petgraph `GraphMap`s,
//!   adjacency lists) with optional visitors that style or skip nodes and edges
//! - **Serialization**: lazy fragment iterator, full text, or a `.dot` file
//! - **Rendering**: display through `dotty` or export images through `dot`,
//!   optionally positioning with `neato` first
//!
//! ## Example
//!
//! ```
//! use dotstyle::{attrs, GraphSeeder, GraphKind};
//! use petgraph::graphmap::DiGraphMap;
//!
//! let graph = DiGraphMap::<u32, ()>::from_edges([(1, 2), (1, 3), (3, 4), (3, 5), (4, 5), (5, 4)]);
//! let mut dot = GraphSeeder::new().build(&graph, "G", GraphKind::Directed).unwrap();
//!
//! dot.set_graph_attributes(attrs! { "size" => "10,10", "rankdir" => "RL" });
//! dot.set_node_style(1, attrs! { "label" => "BASE_NODE", "shape" => "box", "color" => "blue" });
//! dot.set_edge_style(1, 2, attrs! { "style" => "dotted" }).unwrap();
//!
//! let text = dot.to_text();
//! assert!(text.starts_with("digraph G {\nsize=\"10,10\";rankdir=\"RL\";\n"));
//! assert!(text.contains("\t\"1\" -> \"2\" [style=\"dotted\",];\n"));
//! ```
//!
//! Displaying or exporting needs Graphviz on the `PATH` (or configured
//! through [`RendererConfig`]):
//!
//! ```no_run
//! use dotstyle::{Engine, Renderer, RendererConfig, StyleStore};
//!
//! let store: StyleStore = StyleStore::directed("G");
//! let mut renderer = Renderer::new(RendererConfig::default());
//! renderer.display(&store, Engine::Dot)?;
//! renderer.render_to_image(&store, "graph", "gif", Engine::Neato)?;
//! # Ok::<(), dotstyle::DotError>(())
//! ```

mod attributes;
pub mod config;
mod dot;
mod error;
pub mod export;
pub mod render;
mod seeder;
mod store;

pub use attributes::{attributes, Attributes};
pub use config::RendererConfig;
pub use error::{DotError, Result};
pub use export::{EdgeRepr, NodeRepr, StoreRepr};
pub use render::{CommandRunner, Engine, Invocation, Renderer, SystemRunner};
pub use seeder::{GraphSeeder, GraphSource};
pub use store::{GraphKind, StyleStore};
