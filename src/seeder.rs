//! Populate a [`StyleStore`] by walking an existing graph.
//!
//! The seeder never implements traversal itself. It asks a [`GraphSource`]
//! for its nodes and for the outgoing neighbors of each node, and lets two
//! optional visitors decide which nodes and edges make it into the store and
//! how they are styled.

use crate::attributes::Attributes;
use crate::error::Result;
use crate::store::{GraphKind, StyleStore};
use indexmap::{IndexMap, IndexSet};
use petgraph::graphmap::{GraphMap, NodeTrait};
use petgraph::EdgeType;
use std::fmt::Display;
use std::hash::Hash;
use tracing::{debug, trace};

/// The two capabilities the seeder needs from a graph.
pub trait GraphSource {
    type Node: Hash + Eq + Clone;

    /// Every node of the graph.
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// Nodes reachable from `node` by one outgoing edge.
    fn neighbors(&self, node: &Self::Node) -> impl Iterator<Item = Self::Node> + '_;
}

/// Directed maps yield outgoing neighbors; undirected maps yield all of them.
impl<N, E, Ty> GraphSource for GraphMap<N, E, Ty>
where
    N: NodeTrait,
    Ty: EdgeType,
{
    type Node = N;

    fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        GraphMap::nodes(self)
    }

    fn neighbors(&self, node: &N) -> impl Iterator<Item = N> + '_ {
        GraphMap::neighbors(self, *node)
    }
}

/// Plain adjacency lists: keys are the nodes, values their successors.
impl<N> GraphSource for IndexMap<N, Vec<N>>
where
    N: Hash + Eq + Clone,
{
    type Node = N;

    fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.keys().cloned()
    }

    fn neighbors(&self, node: &N) -> impl Iterator<Item = N> + '_ {
        self.get(node).into_iter().flatten().cloned()
    }
}

type NodeVisitor<'a, N> = Box<dyn FnMut(&N) -> Option<Attributes> + 'a>;
type EdgeVisitor<'a, N> = Box<dyn FnMut(&N, &N) -> Option<Attributes> + 'a>;

/// Builder that fills a [`StyleStore`] from a [`GraphSource`].
///
/// Visitors return `Some(attributes)` to keep a node or edge with that style,
/// or `None` to leave it out. Without a visitor everything is kept with an
/// empty style. Edges whose tail was left out (or is not a node of the
/// graph at all) are dropped silently.
///
/// ```
/// use dotstyle::{attrs, GraphSeeder};
/// use petgraph::graphmap::DiGraphMap;
///
/// let graph = DiGraphMap::<u32, ()>::from_edges([(1, 2), (1, 3), (2, 3)]);
/// let store = GraphSeeder::new()
///     .node_visitor(|n: &u32| (*n != 3).then(|| attrs! { "label" => n }))
///     .build(&graph, "G", Default::default())
///     .unwrap();
///
/// assert_eq!(store.node_count(), 2);
/// assert_eq!(store.edge_count(), 1);
/// ```
pub struct GraphSeeder<'a, N> {
    node_visitor: Option<NodeVisitor<'a, N>>,
    edge_visitor: Option<EdgeVisitor<'a, N>>,
}

impl<N> Default for GraphSeeder<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, N> GraphSeeder<'a, N> {
    /// Create a seeder that keeps every node and edge unstyled.
    pub fn new() -> Self {
        Self {
            node_visitor: None,
            edge_visitor: None,
        }
    }

    /// Style (or skip) each node.
    pub fn node_visitor(mut self, visitor: impl FnMut(&N) -> Option<Attributes> + 'a) -> Self {
        self.node_visitor = Some(Box::new(visitor));
        self
    }

    /// Style (or skip) each edge between two kept nodes.
    pub fn edge_visitor(
        mut self,
        visitor: impl FnMut(&N, &N) -> Option<Attributes> + 'a,
    ) -> Self {
        self.edge_visitor = Some(Box::new(visitor));
        self
    }
}

impl<N> GraphSeeder<'_, N>
where
    N: Hash + Eq + Clone + Display,
{
    /// Seed a fresh store from `graph`.
    pub fn build<G>(mut self, graph: &G, name: impl Into<String>, kind: GraphKind) -> Result<StyleStore<N>>
    where
        G: GraphSource<Node = N>,
    {
        let mut store = StyleStore::new(name, kind);
        self.seed(graph, &mut store)?;
        Ok(store)
    }

    /// Seed every node of `graph` into an existing store.
    pub fn seed<G>(&mut self, graph: &G, store: &mut StyleStore<N>) -> Result<()>
    where
        G: GraphSource<Node = N>,
    {
        self.seed_nodes(graph.nodes(), graph, store)
    }

    /// Seed only `nodes`, taking their neighbors from `graph`.
    pub fn seed_nodes<G, I>(&mut self, nodes: I, graph: &G, store: &mut StyleStore<N>) -> Result<()>
    where
        G: GraphSource<Node = N>,
        I: IntoIterator<Item = N>,
    {
        let mut seen: IndexSet<N> = IndexSet::new();

        for node in nodes {
            let style = match self.node_visitor.as_mut() {
                Some(visit) => visit(&node),
                None => Some(Attributes::new()),
            };
            match style {
                Some(attrs) => {
                    store.set_node_style(node.clone(), attrs);
                    seen.insert(node);
                }
                None => trace!(node = %node, "node skipped by visitor"),
            }
        }

        let mut styled_edges = 0usize;
        for head in &seen {
            for tail in graph.neighbors(head).filter(|tail| seen.contains(tail)) {
                let style = match self.edge_visitor.as_mut() {
                    Some(visit) => visit(head, &tail),
                    None => Some(Attributes::new()),
                };
                match style {
                    Some(attrs) => {
                        store.set_edge_style(head.clone(), tail, attrs)?;
                        styled_edges += 1;
                    }
                    None => trace!(head = %head, tail = %tail, "edge skipped by visitor"),
                }
            }
        }

        debug!(
            nodes = seen.len(),
            edges = styled_edges,
            graph = store.name(),
            "seeded style store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use petgraph::graphmap::{DiGraphMap, UnGraphMap};

    fn sample() -> DiGraphMap<u32, ()> {
        DiGraphMap::from_edges([(1, 2), (1, 3), (2, 3)])
    }

    fn edge_list(store: &StyleStore<u32>) -> Vec<(u32, u32)> {
        store.edges().map(|(h, t, _)| (*h, *t)).collect()
    }

    #[test]
    fn test_seed_without_visitors_keeps_everything() {
        let store = GraphSeeder::new()
            .build(&sample(), "G", GraphKind::Directed)
            .unwrap();

        assert_eq!(store.node_count(), 3);
        assert_eq!(edge_list(&store), vec![(1, 2), (1, 3), (2, 3)]);
        assert!(store.nodes().all(|(_, attrs)| attrs.is_empty()));
    }

    #[test]
    fn test_skipped_node_drops_its_edges() {
        let store = GraphSeeder::new()
            .node_visitor(|n: &u32| if *n == 3 { None } else { Some(attrs! {}) })
            .build(&sample(), "G", GraphKind::Directed)
            .unwrap();

        let nodes: Vec<u32> = store.nodes().map(|(n, _)| *n).collect();
        assert_eq!(nodes, vec![1, 2]);
        assert_eq!(edge_list(&store), vec![(1, 2)]);
    }

    #[test]
    fn test_edge_visitor_styles_and_skips() {
        let store = GraphSeeder::new()
            .edge_visitor(|h: &u32, t: &u32| match (*h, *t) {
                (1, 3) => None,
                (2, 3) => Some(attrs! { "style" => "dotted" }),
                _ => Some(attrs! {}),
            })
            .build(&sample(), "G", GraphKind::Directed)
            .unwrap();

        assert_eq!(edge_list(&store), vec![(1, 2), (2, 3)]);
        assert_eq!(store.edge_style(&2, &3), Some(&attrs! { "style" => "dotted" }));
    }

    #[test]
    fn test_node_visitor_styles_nodes() {
        let store = GraphSeeder::new()
            .node_visitor(|n: &u32| Some(attrs! { "label" => format!("node {}", n) }))
            .build(&sample(), "G", GraphKind::Directed)
            .unwrap();

        assert_eq!(store.node_style(&2), Some(&attrs! { "label" => "node 2" }));
    }

    #[test]
    fn test_seed_nodes_subset() {
        let graph = sample();
        let mut store = StyleStore::directed("G");
        GraphSeeder::new()
            .seed_nodes([2, 3], &graph, &mut store)
            .unwrap();

        assert!(!store.is_declared(&1));
        assert_eq!(edge_list(&store), vec![(2, 3)]);
    }

    #[test]
    fn test_seed_keeps_existing_styles() {
        let mut store = StyleStore::directed("G");
        store.set_node_style(10, attrs! { "shape" => "box" });

        GraphSeeder::new().seed(&sample(), &mut store).unwrap();

        assert_eq!(store.node_count(), 4);
        assert_eq!(store.node_style(&10), Some(&attrs! { "shape" => "box" }));
    }

    #[test]
    fn test_adjacency_list_source() {
        let mut graph: IndexMap<&str, Vec<&str>> = IndexMap::new();
        graph.insert("a", vec!["b", "missing"]);
        graph.insert("b", vec!["a"]);

        let store = GraphSeeder::new()
            .build(&graph, "G", GraphKind::Directed)
            .unwrap();

        let edges: Vec<(&str, &str)> = store.edges().map(|(h, t, _)| (*h, *t)).collect();
        assert_eq!(edges, vec![("a", "b"), ("b", "a")]);
    }

    #[test]
    fn test_undirected_map_reports_both_directions() {
        let graph = UnGraphMap::<u32, ()>::from_edges([(1, 2)]);
        let store = GraphSeeder::new()
            .build(&graph, "G", GraphKind::Undirected)
            .unwrap();

        assert_eq!(store.edge_count(), 2);
        assert!(store.edge_style(&1, &2).is_some());
        assert!(store.edge_style(&2, &1).is_some());
    }
}
