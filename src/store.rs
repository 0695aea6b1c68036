//! The in-memory record of graph, node and edge attributes.

use crate::attributes::Attributes;
use crate::error::{DotError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Whether the graph is emitted as a `digraph` or an undirected `graph`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphKind {
    /// `digraph`, edges joined with `->`
    #[default]
    #[serde(rename = "digraph", alias = "directed")]
    Directed,

    /// `graph`, edges joined with `--`
    #[serde(rename = "graph", alias = "undirected")]
    Undirected,
}

impl GraphKind {
    /// The header keyword opening the document.
    pub fn keyword(self) -> &'static str {
        match self {
            GraphKind::Directed => "digraph",
            GraphKind::Undirected => "graph",
        }
    }

    /// The token placed between the two endpoints of an edge statement.
    pub fn connector(self) -> &'static str {
        match self {
            GraphKind::Directed => "->",
            GraphKind::Undirected => "--",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for GraphKind {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "digraph" | "directed" => Ok(GraphKind::Directed),
            "graph" | "undirected" => Ok(GraphKind::Undirected),
            other => Err(DotError::InvalidGraphKind(other.to_string())),
        }
    }
}

/// Styles for a whole graph, its nodes and its edges.
///
/// A node is *declared* the first time it is styled, even with an empty
/// mapping; there is no separate "add node" operation. Edges are keyed by
/// head and then tail, and may only be styled once their head is declared.
/// The tail is not checked.
///
/// Every container preserves insertion order, so serializing the same store
/// always yields the same text.
#[derive(Debug, Clone)]
pub struct StyleStore<N = String> {
    name: String,
    kind: GraphKind,
    graph_attributes: Attributes,
    nodes: IndexMap<N, Attributes>,
    /// Every declared node owns a (possibly empty) row here.
    edges: IndexMap<N, IndexMap<N, Attributes>>,
}

impl<N> Default for StyleStore<N> {
    fn default() -> Self {
        Self::new("G", GraphKind::Directed)
    }
}

impl<N> StyleStore<N> {
    /// Create an empty store. The kind is fixed for the lifetime of the store.
    pub fn new(name: impl Into<String>, kind: GraphKind) -> Self {
        Self {
            name: name.into(),
            kind,
            graph_attributes: Attributes::new(),
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Create an empty `digraph`.
    pub fn directed(name: impl Into<String>) -> Self {
        Self::new(name, GraphKind::Directed)
    }

    /// Create an empty undirected `graph`.
    pub fn undirected(name: impl Into<String>) -> Self {
        Self::new(name, GraphKind::Undirected)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn graph_attributes(&self) -> &Attributes {
        &self.graph_attributes
    }

    /// Replace the whole-graph attributes (size, rankdir, ranksep, ...).
    pub fn set_graph_attributes(&mut self, attrs: Attributes) {
        self.graph_attributes = attrs;
    }

    /// Declared nodes with their attributes, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (&N, &Attributes)> {
        self.nodes.iter()
    }

    /// Styled edges as `(head, tail, attributes)`, grouped by head.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &Attributes)> {
        self.edges
            .iter()
            .flat_map(|(head, row)| row.iter().map(move |(tail, attrs)| (head, tail, attrs)))
    }

    /// Get the number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of styled edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexMap::len).sum()
    }

    /// Check whether nothing has been declared or styled yet.
    pub fn is_empty(&self) -> bool {
        self.graph_attributes.is_empty() && self.nodes.is_empty()
    }
}

impl<N: Hash + Eq + Clone> StyleStore<N> {
    /// Check whether `node` has been declared.
    pub fn is_declared(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Attributes of a declared node.
    pub fn node_style(&self, node: &N) -> Option<&Attributes> {
        self.nodes.get(node)
    }

    /// Attributes of a styled edge.
    pub fn edge_style(&self, head: &N, tail: &N) -> Option<&Attributes> {
        self.edges.get(head).and_then(|row| row.get(tail))
    }

    /// Declare `node` if needed and replace its attributes with `attrs`.
    ///
    /// A node that was already declared keeps its position in the output.
    pub fn set_node_style(&mut self, node: N, attrs: Attributes) {
        self.edges.entry(node.clone()).or_default();
        self.nodes.insert(node, attrs);
    }

    /// Give every currently declared node the same attributes.
    pub fn set_node_style_for_all(&mut self, attrs: Attributes) {
        for style in self.nodes.values_mut() {
            *style = attrs.clone();
        }
    }

    /// Replace the attributes of the edge `head -> tail`.
    ///
    /// Fails with [`DotError::UndeclaredNode`] if `head` was never declared.
    /// `tail` does not need to be declared.
    pub fn set_edge_style(&mut self, head: N, tail: N, attrs: Attributes) -> Result<()>
    where
        N: fmt::Display,
    {
        match self.edges.get_mut(&head) {
            Some(row) => {
                row.insert(tail, attrs);
                Ok(())
            }
            None => Err(DotError::UndeclaredNode {
                head: head.to_string(),
                tail: tail.to_string(),
            }),
        }
    }
}
