//! Serializable representation of a style store.
//!
//! A [`StoreRepr`] carries everything a [`StyleStore`] holds with identifiers
//! stringified, so stores can be exchanged as JSON and rebuilt later.

use crate::attributes::Attributes;
use crate::error::Result;
use crate::store::{GraphKind, StyleStore};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Serializable representation of a StyleStore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRepr {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub kind: GraphKind,
    #[serde(default)]
    pub graph_attributes: Attributes,
    #[serde(default)]
    pub nodes: Vec<NodeRepr>,
    #[serde(default)]
    pub edges: Vec<EdgeRepr>,
}

/// A declared node and its style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRepr {
    pub id: String,
    #[serde(default)]
    pub attributes: Attributes,
}

/// A styled edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRepr {
    pub head: String,
    pub tail: String,
    #[serde(default)]
    pub attributes: Attributes,
}

fn default_name() -> String {
    "G".to_string()
}

impl<N: Display> From<&StyleStore<N>> for StoreRepr {
    fn from(store: &StyleStore<N>) -> Self {
        let nodes = store
            .nodes()
            .map(|(id, attrs)| NodeRepr {
                id: id.to_string(),
                attributes: attrs.clone(),
            })
            .collect();

        let edges = store
            .edges()
            .map(|(head, tail, attrs)| EdgeRepr {
                head: head.to_string(),
                tail: tail.to_string(),
                attributes: attrs.clone(),
            })
            .collect();

        Self {
            name: store.name().to_string(),
            kind: store.kind(),
            graph_attributes: store.graph_attributes().clone(),
            nodes,
            edges,
        }
    }
}

impl StoreRepr {
    /// Rebuild a store by replaying node declarations, then edge stylings.
    ///
    /// An edge whose head does not appear in `nodes` fails with
    /// [`DotError::UndeclaredNode`](crate::DotError::UndeclaredNode).
    pub fn into_store(self) -> Result<StyleStore> {
        let mut store = StyleStore::new(self.name, self.kind);
        store.set_graph_attributes(self.graph_attributes);
        for node in self.nodes {
            store.set_node_style(node.id, node.attributes);
        }
        for edge in self.edges {
            store.set_edge_style(edge.head, edge.tail, edge.attributes)?;
        }
        Ok(store)
    }

    /// Parse a store document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render this representation as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
