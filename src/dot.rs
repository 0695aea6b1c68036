//! DOT serialization of a [`StyleStore`].
//!
//! The document is produced as a lazy sequence of text fragments:
//!
//! ```text
//! digraph G {
//! size="10,10";rankdir="RL";
//! 	"1" [label="BASE_NODE",shape="box",];
//! 	"1" -> "2" [style="dotted",];
//! }
//! ```
//!
//! Identifiers are always quoted and values are interpolated verbatim, with no
//! escaping. Callers are responsible for passing renderer-safe text.

use crate::attributes::Attributes;
use crate::error::{DotError, Result};
use crate::store::StyleStore;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::iter;
use std::path::Path;
use tracing::debug;

const STATEMENT_END: &str = "];\n";

impl<N: Display> StyleStore<N> {
    /// Lazily produce the DOT document as text fragments.
    ///
    /// Every call starts over from the current state of the store, so the
    /// sequence can be produced as many times as needed.
    pub fn fragments(&self) -> impl Iterator<Item = String> + '_ {
        let kind = self.kind();

        let header = iter::once(format!("{} {} {{\n", kind.keyword(), self.name()));

        let graph_attributes = self
            .graph_attributes()
            .iter()
            .map(|(name, value)| format!("{}=\"{}\";", name, value))
            .chain(iter::once("\n".to_string()));

        let nodes = self
            .nodes()
            .flat_map(|(node, attrs)| statement(format!("\t\"{}\" [", node), attrs));

        let edges = self.edges().flat_map(move |(head, tail, attrs)| {
            statement(
                format!("\t\"{}\" {} \"{}\" [", head, kind.connector(), tail),
                attrs,
            )
        });

        header
            .chain(graph_attributes)
            .chain(nodes)
            .chain(edges)
            .chain(iter::once("}\n".to_string()))
    }

    /// Materialize the whole document.
    pub fn to_text(&self) -> String {
        self.fragments().collect()
    }

    /// Stream the document into `writer` fragment by fragment.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for fragment in self.fragments() {
            writer.write_all(fragment.as_bytes())?;
        }
        Ok(())
    }

    /// Write the document to `path`, replacing any existing content.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| DotError::io(path, e))?;

        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| DotError::io(path, e))?;

        debug!(path = %path.display(), graph = self.name(), "saved dot file");
        Ok(())
    }
}

/// One node or edge statement: the opening, one `name="value",` per
/// attribute, and the closing bracket.
fn statement(opening: String, attrs: &Attributes) -> impl Iterator<Item = String> + '_ {
    iter::once(opening)
        .chain(
            attrs
                .iter()
                .map(|(name, value)| format!("{}=\"{}\",", name, value)),
        )
        .chain(iter::once(STATEMENT_END.to_string()))
}

impl<N: Display> Display for StyleStore<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in self.fragments() {
            f.write_str(&fragment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::store::GraphKind;
    use pretty_assertions::assert_eq;

    fn two_nodes(kind: GraphKind) -> StyleStore<u32> {
        let mut store = StyleStore::new("G", kind);
        store.set_node_style(1, attrs! {});
        store.set_node_style(2, attrs! {});
        store
            .set_edge_style(1, 2, attrs! { "style" => "dotted" })
            .unwrap();
        store
    }

    #[test]
    fn test_directed_document() {
        assert_eq!(
            two_nodes(GraphKind::Directed).to_text(),
            "digraph G {\n\n\t\"1\" [];\n\t\"2\" [];\n\t\"1\" -> \"2\" [style=\"dotted\",];\n}\n"
        );
    }

    #[test]
    fn test_undirected_changes_only_keyword_and_connector() {
        let directed = two_nodes(GraphKind::Directed).to_text();
        let undirected = two_nodes(GraphKind::Undirected).to_text();

        assert_eq!(
            undirected,
            directed
                .replacen("digraph", "graph", 1)
                .replace(" -> ", " -- ")
        );
    }

    #[test]
    fn test_empty_store() {
        let store: StyleStore = StyleStore::directed("G");
        assert_eq!(store.to_text(), "digraph G {\n\n}\n");
    }

    #[test]
    fn test_graph_attributes_share_one_line() {
        let mut store: StyleStore = StyleStore::directed("deps");
        store.set_graph_attributes(attrs! { "size" => "10,10", "rankdir" => "RL" });

        assert_eq!(
            store.to_text(),
            "digraph deps {\nsize=\"10,10\";rankdir=\"RL\";\n}\n"
        );
    }

    #[test]
    fn test_node_attributes_keep_order_with_trailing_comma() {
        let mut store = StyleStore::directed("G");
        store.set_node_style("base", attrs! { "label" => "BASE_NODE", "shape" => "box", "color" => "blue" });

        assert_eq!(
            store.to_text(),
            "digraph G {\n\n\t\"base\" [label=\"BASE_NODE\",shape=\"box\",color=\"blue\",];\n}\n"
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut store = StyleStore::directed("G");
        store.set_node_style("a\"b", attrs! { "label" => "say \"hi\"" });

        assert!(store
            .to_text()
            .contains("\t\"a\"b\" [label=\"say \"hi\"\",];\n"));
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let store = two_nodes(GraphKind::Directed);
        let first: Vec<String> = store.fragments().collect();
        let second: Vec<String> = store.fragments().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_matches_to_text() {
        let store = two_nodes(GraphKind::Directed);
        assert_eq!(store.to_string(), store.to_text());
    }

    #[test]
    fn test_write_to_streams_whole_document() {
        let store = two_nodes(GraphKind::Directed);
        let mut buffer = Vec::new();
        store.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), store.to_text());
    }
}
