//! JSON document export backend.
//!
//! Writes the graph in the shape renderers consume: a single object with
//! `nodes` and `edges` arrays, both in the engine's emission order.

use std::io::Write;

use serde::Serialize;

use arbor_core::graph::{GraphEdge, GraphNode};

use super::{Error, Exporter};
use crate::structure::Graph;

/// Serializable view of a graph in the renderer document shape.
#[derive(Debug, Serialize)]
struct Document<'a> {
    nodes: Vec<&'a GraphNode>,
    edges: Vec<&'a GraphEdge>,
}

impl<'a> Document<'a> {
    fn from_graph(graph: &'a Graph) -> Self {
        Self {
            nodes: graph.nodes().collect(),
            edges: graph.edges().collect(),
        }
    }
}

/// Exporter writing the graph document as pretty-printed JSON.
pub struct JsonExporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonExporter<W> {
    /// Create an exporter over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Exporter for JsonExporter<W> {
    fn export_graph(&mut self, graph: &Graph) -> Result<(), Error> {
        let document = Document::from_graph(graph);
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Serializes a graph to a pretty-printed JSON document string.
///
/// # Errors
///
/// Returns [`Error::Render`] if serialization fails.
pub fn to_string(graph: &Graph) -> Result<String, Error> {
    let mut buffer = Vec::new();
    JsonExporter::new(&mut buffer).export_graph(graph)?;
    String::from_utf8(buffer).map_err(|err| Error::Render(err.to_string()))
}

#[cfg(test)]
mod tests {
    use arbor_core::{
        geometry::Point,
        graph::{NodeKind, NodeStyle},
        identifier::Id,
    };

    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(GraphNode::new(
            Id::from_index(0),
            NodeKind::Container,
            "JSON Object",
            Point::default(),
            NodeStyle::container("beige"),
        ));
        graph.add_node(GraphNode::new(
            Id::from_index(1),
            NodeKind::Leaf,
            "a: 1",
            Point::new(0.0, 200.0),
            NodeStyle::leaf("lightblue"),
        ));
        graph.add_edge(GraphEdge::new(Id::from_index(0), Id::from_index(1)));
        graph
    }

    #[test]
    fn test_document_shape() {
        let rendered = to_string(&sample_graph()).expect("Graph serializes");
        let parsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("Output is valid JSON");

        let nodes = parsed["nodes"].as_array().expect("nodes array");
        let edges = parsed["edges"].as_array().expect("edges array");
        assert_eq!(nodes.len(), 2);
        assert_eq!(edges.len(), 1);

        assert_eq!(nodes[0]["id"], "n0");
        assert_eq!(nodes[0]["kind"], "container");
        assert_eq!(nodes[1]["position"]["y"], 200.0);
        assert_eq!(edges[0]["id"], "n0-n1");
        assert_eq!(edges[0]["source"], "n0");
        assert_eq!(edges[0]["target"], "n1");
    }

    #[test]
    fn test_empty_graph_document() {
        let rendered = to_string(&Graph::new()).expect("Empty graph serializes");
        let parsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("Output is valid JSON");

        assert_eq!(parsed["nodes"].as_array().map(Vec::len), Some(0));
        assert_eq!(parsed["edges"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_exporter_writes_trailing_newline() {
        let mut buffer = Vec::new();
        JsonExporter::new(&mut buffer)
            .export_graph(&sample_graph())
            .expect("Graph exports");

        assert_eq!(buffer.last(), Some(&b'\n'));
    }
}
