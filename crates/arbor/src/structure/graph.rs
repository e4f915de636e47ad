//! The graph container accumulated during layout.
//!
//! This module provides a lightweight, insertion-ordered graph structure
//! tailored to Arbor's needs: the layout engine appends nodes in traversal
//! order and connects each non-root node to its parent, and consumers read
//! the result back out in exactly that order.
//!
//! Capabilities:
//! - Node and edge storage via `Vec`, preserving emission order
//! - Tracking of both incoming and outgoing edges per node
//! - Root detection (nodes with no incoming edges)
//!
//! The graph is directed. For the tree-shaped output the engine produces,
//! exactly one node is a root and every other node has exactly one
//! incoming edge; the structure itself does not enforce tree shape, which
//! keeps it testable independently of the engine.

use std::collections::HashMap;

use arbor_core::{
    graph::{GraphEdge, GraphNode},
    identifier::Id,
};

/// Index of an edge in the graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EdgeIndex(usize);

/// Insertion-ordered collection of laid-out nodes and the edges between them.
///
/// Nodes and edges are read back in the order they were added, which for
/// engine-built graphs is BFS order from the root.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    node_indices: HashMap<Id, usize>,
    edges: Vec<GraphEdge>,
    income_edges: HashMap<Id, Vec<EdgeIndex>>,
    outgoing_edges: HashMap<Id, Vec<EdgeIndex>>,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node with the given ID, if it exists.
    pub fn node(&self, id: Id) -> Option<&GraphNode> {
        self.node_indices.get(&id).map(|&idx| &self.nodes[idx])
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter()
    }

    /// Returns the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if the graph contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks if a node with the given ID exists in the graph.
    pub fn contains_node(&self, id: Id) -> bool {
        self.node_indices.contains_key(&id)
    }

    /// Returns an iterator over root nodes (nodes with no incoming edges),
    /// in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes
            .iter()
            .filter(|node| !self.income_edges.contains_key(&node.id()))
    }

    /// Returns the number of incoming edges for the given node.
    pub fn incoming_count(&self, id: Id) -> usize {
        self.income_edges.get(&id).map_or(0, Vec::len)
    }

    /// Returns an iterator over nodes that are targets of outgoing edges
    /// from the given source, in edge insertion order.
    ///
    /// Returns an empty iterator if the source has no outgoing edges.
    pub fn outgoing_nodes(&self, source_id: Id) -> impl Iterator<Item = &GraphNode> {
        self.outgoing_edges
            .get(&source_id)
            .into_iter()
            .flatten()
            .filter_map(|idx| self.node(self.edges[idx.0].target()))
    }

    /// Appends a node to the graph.
    ///
    /// If a node with the same ID was already added, the earlier node stays
    /// in the node list but is no longer reachable by ID lookup. The engine
    /// never reuses IDs within one build.
    pub fn add_node(&mut self, node: GraphNode) {
        self.node_indices.insert(node.id(), self.nodes.len());
        self.nodes.push(node);
    }

    /// Appends a directed edge between two nodes already in the graph.
    ///
    /// Updates the incoming/outgoing edge indices used for root detection
    /// and traversal.
    ///
    /// # Panics
    /// Panics in debug mode if either endpoint does not exist in the graph.
    /// This panic is for internal developer testing and bug detection. In a
    /// release build, this check is optimized away.
    pub fn add_edge(&mut self, edge: GraphEdge) {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.contains_node(edge.source()),
                "Adding edge: Source node {} does not exist for {edge:?}",
                edge.source(),
            );
            assert!(
                self.contains_node(edge.target()),
                "Adding edge: Target node {} does not exist for {edge:?}",
                edge.target(),
            );
        }

        let idx = EdgeIndex(self.edges.len());
        self.outgoing_edges
            .entry(edge.source())
            .or_default()
            .push(idx);
        self.income_edges.entry(edge.target()).or_default().push(idx);
        self.edges.push(edge);
    }
}

#[cfg(test)]
mod tests {
    use arbor_core::{
        geometry::Point,
        graph::{NodeKind, NodeStyle},
    };

    use super::*;

    fn container(idx: usize, label: &str) -> GraphNode {
        GraphNode::new(
            Id::from_index(idx),
            NodeKind::Container,
            label,
            Point::default(),
            NodeStyle::container("beige"),
        )
    }

    fn leaf(idx: usize, label: &str) -> GraphNode {
        GraphNode::new(
            Id::from_index(idx),
            NodeKind::Leaf,
            label,
            Point::default(),
            NodeStyle::leaf("lightblue"),
        )
    }

    #[test]
    fn test_graph_new() {
        let graph = Graph::new();

        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.roots().count(), 0);
    }

    #[test]
    fn test_add_node() {
        let mut graph = Graph::new();

        graph.add_node(container(0, "JSON Object"));
        graph.add_node(leaf(1, "a: 1"));

        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains_node(Id::from_index(0)));
        assert!(graph.contains_node(Id::from_index(1)));
        assert!(!graph.contains_node(Id::from_index(2)));
    }

    #[test]
    fn test_node_lookup() {
        let mut graph = Graph::new();
        graph.add_node(container(0, "JSON Object"));

        let found = graph.node(Id::from_index(0));
        assert_eq!(found.map(GraphNode::label), Some("JSON Object"));
        assert!(graph.node(Id::from_index(9)).is_none());
    }

    #[test]
    fn test_nodes_preserve_insertion_order() {
        let mut graph = Graph::new();
        graph.add_node(container(0, "JSON Object"));
        graph.add_node(leaf(1, "first"));
        graph.add_node(leaf(2, "second"));

        let labels: Vec<&str> = graph.nodes().map(GraphNode::label).collect();
        assert_eq!(labels, vec!["JSON Object", "first", "second"]);
    }

    #[test]
    fn test_add_edge() {
        let mut graph = Graph::new();
        graph.add_node(container(0, "JSON Object"));
        graph.add_node(leaf(1, "a: 1"));

        graph.add_edge(GraphEdge::new(Id::from_index(0), Id::from_index(1)));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.incoming_count(Id::from_index(1)), 1);
        assert_eq!(graph.incoming_count(Id::from_index(0)), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not exist")]
    fn test_add_edge_missing_endpoint_panics() {
        let mut graph = Graph::new();
        graph.add_node(container(0, "JSON Object"));

        graph.add_edge(GraphEdge::new(Id::from_index(0), Id::from_index(99)));
    }

    #[test]
    fn test_roots() {
        let mut graph = Graph::new();
        graph.add_node(container(0, "JSON Object"));
        graph.add_node(container(1, "child"));
        graph.add_node(leaf(2, "x: 1"));
        graph.add_edge(GraphEdge::new(Id::from_index(0), Id::from_index(1)));
        graph.add_edge(GraphEdge::new(Id::from_index(1), Id::from_index(2)));

        let roots: Vec<&str> = graph.roots().map(GraphNode::label).collect();
        assert_eq!(roots, vec!["JSON Object"]);
    }

    #[test]
    fn test_outgoing_nodes() {
        let mut graph = Graph::new();
        graph.add_node(container(0, "JSON Object"));
        graph.add_node(leaf(1, "a: 1"));
        graph.add_node(leaf(2, "b: 2"));
        graph.add_node(leaf(3, "orphaned"));
        graph.add_edge(GraphEdge::new(Id::from_index(0), Id::from_index(1)));
        graph.add_edge(GraphEdge::new(Id::from_index(0), Id::from_index(2)));

        let children: Vec<&str> = graph
            .outgoing_nodes(Id::from_index(0))
            .map(GraphNode::label)
            .collect();
        assert_eq!(children, vec!["a: 1", "b: 2"]);

        assert_eq!(graph.outgoing_nodes(Id::from_index(3)).count(), 0);
        assert_eq!(graph.outgoing_nodes(Id::from_index(42)).count(), 0);
    }

    #[test]
    fn test_tree_shape_counts() {
        // A small tree: root -> {leaf, container -> leaf}
        let mut graph = Graph::new();
        graph.add_node(container(0, "JSON Object"));
        graph.add_node(leaf(1, "Index 0: 1"));
        graph.add_node(container(2, "Index 1"));
        graph.add_node(leaf(3, "x: true"));
        graph.add_edge(GraphEdge::new(Id::from_index(0), Id::from_index(1)));
        graph.add_edge(GraphEdge::new(Id::from_index(0), Id::from_index(2)));
        graph.add_edge(GraphEdge::new(Id::from_index(2), Id::from_index(3)));

        assert_eq!(graph.edge_count(), graph.node_count() - 1);
        assert_eq!(graph.roots().count(), 1);
        for node in graph.nodes().skip(1) {
            assert_eq!(graph.incoming_count(node.id()), 1);
        }
    }
}
