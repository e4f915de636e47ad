//! Arbor - a tree layout engine for JSON visualization.
//!
//! Parsing, layout, and document export for turning JSON text into a
//! renderable graph of positioned nodes and edges. The graph forms a tree
//! rooted at the input value, with containers (objects and arrays) visually
//! distinguished from the primitive leaves they hold.

pub mod config;
pub mod layout;
pub mod session;

mod error;
mod export;
mod structure;

pub use arbor_core::{color, geometry, graph, identifier};

pub use error::ArborError;
pub use layout::{LayoutError, LeafPolicy};
pub use structure::Graph;

use log::{debug, info, trace};

use serde_json::Value;

use config::AppConfig;
use layout::Engine;

/// Builder for parsing JSON input and producing laid-out graph documents.
///
/// This provides an API for processing JSON input through the parsing,
/// layout, and export stages.
///
/// # Examples
///
/// ```rust
/// use arbor::{GraphBuilder, config::AppConfig};
///
/// let source = r#"{"a": 1, "b": 2}"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = GraphBuilder::new(config);
///
/// // Parse source to a JSON value
/// let value = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Lay the value out as a graph
/// let graph = builder.build(&value)
///     .expect("Failed to build");
/// assert_eq!(graph.node_count(), 3);
///
/// // Or use default config
/// let builder = GraphBuilder::default();
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    config: AppConfig,
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a JSON value.
    ///
    /// This is the upstream input boundary: text that does not parse never
    /// reaches the layout engine.
    ///
    /// # Arguments
    ///
    /// * `source` - JSON text as a string
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Parse`], carrying the source text, if the
    /// input is not well-formed JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::GraphBuilder;
    ///
    /// let builder = GraphBuilder::default();
    /// let value = builder.parse(r#"[1, 2, 3]"#)
    ///     .expect("Failed to parse input");
    /// assert!(builder.parse("{invalid").is_err());
    /// ```
    pub fn parse(&self, source: &str) -> Result<Value, ArborError> {
        info!("Parsing JSON input");

        let value: Value = serde_json::from_str(source)
            .map_err(|err| ArborError::new_parse_error(err, source))?;

        debug!("Input parsed successfully");
        trace!(value:?; "Parsed value");

        Ok(value)
    }

    /// Lay out a JSON value as a graph of positioned nodes and edges.
    ///
    /// The graph is created fresh on every call; the caller owns it and
    /// replaces any previous graph wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Config`] for invalid configured style colors,
    /// or [`ArborError::Layout`] if a configured node budget is exceeded.
    pub fn build(&self, value: &Value) -> Result<Graph, ArborError> {
        let layout = self.config.layout();
        info!(leaf_policy:? = layout.leaf_policy(); "Building graph layout");

        let container_fill = self
            .config
            .style()
            .container_fill()
            .map_err(ArborError::Config)?;
        let leaf_fill = self.config.style().leaf_fill().map_err(ArborError::Config)?;

        let mut engine = Engine::new()
            .with_level_spacing(layout.level_spacing())
            .with_node_spacing(layout.node_spacing())
            .with_leaf_policy(layout.leaf_policy())
            .with_max_nodes(layout.max_nodes());
        if let Some(fill) = container_fill {
            engine = engine.with_container_fill(fill.to_string());
        }
        if let Some(fill) = leaf_fill {
            engine = engine.with_leaf_fill(fill.to_string());
        }

        let graph = engine.calculate(value)?;

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count();
            "Graph built"
        );
        trace!(graph:?; "Built graph");

        Ok(graph)
    }

    /// Render a laid-out graph to the JSON document consumed by renderers.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Export`] if serialization fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::GraphBuilder;
    ///
    /// let builder = GraphBuilder::default();
    /// let value = builder.parse(r#"{"a": 1}"#).expect("Failed to parse");
    /// let graph = builder.build(&value).expect("Failed to build");
    ///
    /// let document = builder.render_json(&graph).expect("Failed to render");
    /// assert!(document.contains("\"nodes\""));
    /// assert!(document.contains("\"edges\""));
    /// ```
    pub fn render_json(&self, graph: &Graph) -> Result<String, ArborError> {
        info!("Rendering graph document");

        let document = export::json::to_string(graph)?;

        debug!("Graph document rendered successfully");
        Ok(document)
    }
}
