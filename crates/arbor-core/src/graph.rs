//! The laid-out graph model handed to renderers.
//!
//! These types are the output vocabulary of the layout engine: positioned,
//! labeled nodes and directed edges. They carry no behavior beyond
//! construction and access; renderers treat them as initial drawing state
//! and are free to let users reposition nodes afterwards.
//!
//! All types serialize with `serde` so the graph can cross the renderer
//! boundary as a plain JSON document.

use serde::Serialize;

use crate::{geometry::Point, identifier::Id};

/// Whether a node represents a JSON container or primitive content.
///
/// Containers are objects and arrays (including the root); leaves hold one
/// primitive value, or several when the engine's grouped leaf policy merges
/// a container's primitive children into one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Container,
    Leaf,
}

/// Presentational hints attached to a node.
///
/// Not semantically load-bearing: renderers may ignore or override them.
/// The defaults visually distinguish containers (bold, beige fill) from
/// leaves (regular weight, light blue fill).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeStyle {
    fill: String,
    bold: bool,
}

impl NodeStyle {
    /// Style hints for a container node with the given fill color.
    pub fn container(fill: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            bold: true,
        }
    }

    /// Style hints for a leaf node with the given fill color.
    pub fn leaf(fill: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            bold: false,
        }
    }

    /// Returns the fill color as a CSS color string.
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Returns whether the node label should be rendered bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

/// A positioned, labeled node in the output graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    id: Id,
    kind: NodeKind,
    label: String,
    position: Point,
    style: NodeStyle,
}

impl GraphNode {
    /// Creates a new node. Ids are expected to be unique within one build.
    pub fn new(
        id: Id,
        kind: NodeKind,
        label: impl Into<String>,
        position: Point,
        style: NodeStyle,
    ) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            position,
            style,
        }
    }

    /// Returns the node's identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the node's kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the node's initial position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the node's presentational hints.
    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    /// Checks whether this node represents a JSON object or array.
    pub fn is_container(&self) -> bool {
        self.kind == NodeKind::Container
    }

    /// Checks whether this node represents primitive content.
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }
}

/// A directed edge from a parent node to a child node.
///
/// The edge id is derived from the endpoint ids, so distinct parent/child
/// pairs can never collide within one build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphEdge {
    id: Id,
    source: Id,
    target: Id,
}

impl GraphEdge {
    /// Creates a new edge between the given nodes.
    pub fn new(source: Id, target: Id) -> Self {
        Self {
            id: Id::between(source, target),
            source,
            target,
        }
    }

    /// Returns the edge's identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the parent node's id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the child node's id.
    pub fn target(&self) -> Id {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_checks() {
        let container = GraphNode::new(
            Id::from_index(0),
            NodeKind::Container,
            "JSON Object",
            Point::default(),
            NodeStyle::container("beige"),
        );
        let leaf = GraphNode::new(
            Id::from_index(1),
            NodeKind::Leaf,
            "a: 1",
            Point::new(0.0, 200.0),
            NodeStyle::leaf("lightblue"),
        );

        assert!(container.is_container());
        assert!(!container.is_leaf());
        assert!(leaf.is_leaf());
        assert!(!leaf.is_container());
    }

    #[test]
    fn test_style_constructors() {
        let container = NodeStyle::container("beige");
        let leaf = NodeStyle::leaf("lightblue");

        assert_eq!(container.fill(), "beige");
        assert!(container.is_bold());
        assert_eq!(leaf.fill(), "lightblue");
        assert!(!leaf.is_bold());
    }

    #[test]
    fn test_edge_id_derivation() {
        let parent = Id::from_index(0);
        let child = Id::from_index(3);

        let edge = GraphEdge::new(parent, child);

        assert_eq!(edge.source(), parent);
        assert_eq!(edge.target(), child);
        assert_eq!(edge.id(), "n0-n3");
    }

    #[test]
    fn test_edges_between_distinct_pairs_never_collide() {
        let edge1 = GraphEdge::new(Id::from_index(0), Id::from_index(1));
        let edge2 = GraphEdge::new(Id::from_index(0), Id::from_index(2));
        let edge3 = GraphEdge::new(Id::from_index(1), Id::from_index(2));

        assert_ne!(edge1.id(), edge2.id());
        assert_ne!(edge1.id(), edge3.id());
        assert_ne!(edge2.id(), edge3.id());
    }

    #[test]
    fn test_node_serialization_shape() {
        let node = GraphNode::new(
            Id::from_index(5),
            NodeKind::Leaf,
            "name: arbor",
            Point::new(250.0, 400.0),
            NodeStyle::leaf("lightblue"),
        );

        let json = serde_json::to_value(&node).expect("GraphNode serializes");

        assert_eq!(json["id"], "n5");
        assert_eq!(json["kind"], "leaf");
        assert_eq!(json["label"], "name: arbor");
        assert_eq!(json["position"]["x"], 250.0);
        assert_eq!(json["position"]["y"], 400.0);
        assert_eq!(json["style"]["fill"], "lightblue");
        assert_eq!(json["style"]["bold"], false);
    }

    #[test]
    fn test_edge_serialization_shape() {
        let edge = GraphEdge::new(Id::from_index(0), Id::from_index(1));

        let json = serde_json::to_value(edge).expect("GraphEdge serializes");

        assert_eq!(json["id"], "n0-n1");
        assert_eq!(json["source"], "n0");
        assert_eq!(json["target"], "n1");
    }
}
