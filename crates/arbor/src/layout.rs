//! Tree layout engine for JSON values.
//!
//! This module turns one parsed JSON value into a laid-out graph: a
//! breadth-first walk over the value emits one node per visited entry and
//! one edge per parent/child pair, assigning positions as it goes.
//!
//! # Positioning
//!
//! Positions come from two counters:
//!
//! - `y = level * level_spacing` — every node at the same depth shares a row.
//! - `x` — each level keeps a horizontal cursor that starts at zero and
//!   advances by `node_spacing + CURSOR_GAP` per node placed at that level,
//!   regardless of which parent the node belongs to.
//!
//! Because the cursor is keyed by level alone, nodes from unrelated subtrees
//! interleave left-to-right in dequeue order. The result is readable but not
//! balanced under parents; renderers let users drag nodes afterwards.
//!
//! # Leaf policy
//!
//! Primitive children are emitted either one leaf per value (`individual`)
//! or merged into a single leaf per container (`grouped`), selected by the
//! [`LeafPolicy`] parameter. See the variant docs for the tradeoff.

use std::collections::{HashMap, VecDeque};

use log::debug;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use arbor_core::{
    geometry::Point,
    graph::{GraphEdge, GraphNode, NodeKind, NodeStyle},
    identifier::Id,
};

use crate::structure::Graph;

/// Vertical distance between consecutive levels, in layout units.
pub const DEFAULT_LEVEL_SPACING: f32 = 200.0;

/// Base horizontal distance between nodes within one level.
pub const DEFAULT_NODE_SPACING: f32 = 150.0;

/// Extra horizontal gap added on top of the node spacing per placement.
const CURSOR_GAP: f32 = 100.0;

/// Label of the root node, which stands for the whole input document.
const ROOT_LABEL: &str = "JSON Object";

const DEFAULT_CONTAINER_FILL: &str = "beige";
const DEFAULT_LEAF_FILL: &str = "lightblue";

/// Errors produced by the layout engine.
///
/// The engine is total over well-formed JSON values; the only failure is the
/// opt-in node budget.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("graph too large: node budget of {max} exceeded")]
    TooManyNodes { max: usize },
}

/// How primitive-valued children of a container become leaf nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafPolicy {
    /// Every primitive child becomes its own leaf node with its own edge.
    ///
    /// Keeps a strict parent-to-leaf edge per value, at the cost of wider
    /// levels for flat documents.
    #[default]
    Individual,

    /// All primitive children of one container merge into a single leaf
    /// whose label joins the `key: value` entries with `", "`, connected by
    /// exactly one edge.
    ///
    /// Trades per-value traceability for a more compact graph.
    Grouped,
}

/// One pending unit of traversal work.
///
/// Labels and kinds are decided when a child is planned, so dequeuing only
/// places the node and, for containers, plans the next generation.
struct WorkItem<'a> {
    /// Value to descend into after the node is emitted; `None` for leaves.
    value: Option<&'a Value>,
    parent: Option<Id>,
    level: usize,
    label: String,
    kind: NodeKind,
}

/// The tree layout engine.
///
/// Configured builder-style and reusable across inputs; [`Engine::calculate`]
/// is a pure function of the engine's configuration and the input value.
///
/// # Examples
///
/// ```
/// use arbor::layout::{Engine, LeafPolicy};
///
/// let value = serde_json::json!({"a": 1, "b": 2});
/// let engine = Engine::new().with_leaf_policy(LeafPolicy::Grouped);
///
/// let graph = engine.calculate(&value).expect("no node budget configured");
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    level_spacing: f32,
    node_spacing: f32,
    leaf_policy: LeafPolicy,
    max_nodes: Option<usize>,
    container_fill: String,
    leaf_fill: String,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            level_spacing: DEFAULT_LEVEL_SPACING,
            node_spacing: DEFAULT_NODE_SPACING,
            leaf_policy: LeafPolicy::default(),
            max_nodes: None,
            container_fill: DEFAULT_CONTAINER_FILL.to_string(),
            leaf_fill: DEFAULT_LEAF_FILL.to_string(),
        }
    }
}

impl Engine {
    /// Create a new engine with default spacing, policy, and style hints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertical distance between levels.
    pub fn with_level_spacing(mut self, spacing: f32) -> Self {
        self.level_spacing = spacing;
        self
    }

    /// Set the base horizontal distance between nodes within a level.
    pub fn with_node_spacing(mut self, spacing: f32) -> Self {
        self.node_spacing = spacing;
        self
    }

    /// Set how primitive children become leaf nodes.
    pub fn with_leaf_policy(mut self, policy: LeafPolicy) -> Self {
        self.leaf_policy = policy;
        self
    }

    /// Set the node budget. `None` (the default) leaves the build unbounded.
    pub fn with_max_nodes(mut self, max: Option<usize>) -> Self {
        self.max_nodes = max;
        self
    }

    /// Set the fill color hint for container nodes.
    pub fn with_container_fill(mut self, fill: impl Into<String>) -> Self {
        self.container_fill = fill.into();
        self
    }

    /// Set the fill color hint for leaf nodes.
    pub fn with_leaf_fill(mut self, fill: impl Into<String>) -> Self {
        self.leaf_fill = fill.into();
        self
    }

    /// Lay out the given JSON value as a tree of positioned nodes and edges.
    ///
    /// The graph is built fresh on every call: node ids restart at `n0` and
    /// carry no identity across invocations.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::TooManyNodes`] if a node budget is configured
    /// and the input would exceed it. Without a budget this function cannot
    /// fail.
    pub fn calculate(&self, value: &Value) -> Result<Graph, LayoutError> {
        let mut graph = Graph::new();
        let mut cursors: HashMap<usize, f32> = HashMap::new();
        let mut next_index = 0usize;

        let mut queue = VecDeque::new();
        queue.push_back(WorkItem {
            value: Some(value),
            parent: None,
            level: 0,
            label: ROOT_LABEL.to_string(),
            kind: NodeKind::Container,
        });

        while let Some(item) = queue.pop_front() {
            if let Some(max) = self.max_nodes {
                if graph.node_count() >= max {
                    return Err(LayoutError::TooManyNodes { max });
                }
            }

            let id = Id::from_index(next_index);
            next_index += 1;

            let cursor = cursors.entry(item.level).or_insert(0.0);
            let position = Point::new(*cursor, item.level as f32 * self.level_spacing);
            *cursor += self.node_spacing + CURSOR_GAP;

            let style = match item.kind {
                NodeKind::Container => NodeStyle::container(self.container_fill.as_str()),
                NodeKind::Leaf => NodeStyle::leaf(self.leaf_fill.as_str()),
            };
            graph.add_node(GraphNode::new(id, item.kind, item.label, position, style));

            if let Some(parent) = item.parent {
                graph.add_edge(GraphEdge::new(parent, id));
            }

            if let Some(value) = item.value {
                self.enqueue_children(id, value, item.level, &mut queue);
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count();
            "Graph layout calculated"
        );

        Ok(graph)
    }

    /// Plan the children of a container node and append them to the queue.
    ///
    /// Children keep container order: array order for arrays, key insertion
    /// order for objects. Under the grouped policy, the merged leaf takes
    /// the queue slot of the container's first primitive child, so it keeps
    /// its relative order with container siblings.
    fn enqueue_children<'a>(
        &self,
        parent: Id,
        value: &'a Value,
        level: usize,
        queue: &mut VecDeque<WorkItem<'a>>,
    ) {
        let mut planned: Vec<WorkItem<'a>> = Vec::new();
        let mut merged_labels: Vec<String> = Vec::new();
        let mut merged_slot = 0usize;

        match value {
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.plan_child(
                        parent,
                        format!("Index {index}"),
                        child,
                        level,
                        &mut planned,
                        &mut merged_labels,
                        &mut merged_slot,
                    );
                }
            }
            Value::Object(entries) => {
                for (key, child) in entries {
                    self.plan_child(
                        parent,
                        key.clone(),
                        child,
                        level,
                        &mut planned,
                        &mut merged_labels,
                        &mut merged_slot,
                    );
                }
            }
            _ => {}
        }

        if !merged_labels.is_empty() {
            planned.insert(
                merged_slot,
                WorkItem {
                    value: None,
                    parent: Some(parent),
                    level: level + 1,
                    label: merged_labels.join(", "),
                    kind: NodeKind::Leaf,
                },
            );
        }

        queue.extend(planned);
    }

    /// Plan a single child entry: containers are queued for descent, and
    /// primitives become leaf work or merged-label entries per the policy.
    #[allow(clippy::too_many_arguments)]
    fn plan_child<'a>(
        &self,
        parent: Id,
        key: String,
        child: &'a Value,
        level: usize,
        planned: &mut Vec<WorkItem<'a>>,
        merged_labels: &mut Vec<String>,
        merged_slot: &mut usize,
    ) {
        match child {
            Value::Object(_) | Value::Array(_) => planned.push(WorkItem {
                value: Some(child),
                parent: Some(parent),
                level: level + 1,
                label: key,
                kind: NodeKind::Container,
            }),
            primitive => {
                let label = format!("{key}: {}", scalar_label(primitive));
                match self.leaf_policy {
                    LeafPolicy::Individual => planned.push(WorkItem {
                        value: None,
                        parent: Some(parent),
                        level: level + 1,
                        label,
                        kind: NodeKind::Leaf,
                    }),
                    LeafPolicy::Grouped => {
                        if merged_labels.is_empty() {
                            *merged_slot = planned.len();
                        }
                        merged_labels.push(label);
                    }
                }
            }
        }
    }
}

/// Renders a primitive value the way it appears in node labels: strings
/// without surrounding quotes, everything else as its JSON literal
/// (`null`, `true`, `false`, numbers).
fn scalar_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
