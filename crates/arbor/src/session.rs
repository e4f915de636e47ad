//! Caller-side state for live rebuild flows.
//!
//! The engine itself is a pure function; an interactive caller (an editor
//! pane, a file watcher) owns the current graph and replaces it wholesale
//! whenever the input text changes. This module models that caller with a
//! two-state machine: [`RenderState::Empty`] when there is nothing valid to
//! show, [`RenderState::Rendered`] after a successful parse and build.
//!
//! Parse failures never reach the renderer as errors. They degrade to
//! `Empty`, and the engine is not invoked at all for input that does not
//! parse.

use log::debug;

use crate::{GraphBuilder, config::AppConfig, structure::Graph};

/// State of the caller's current graph.
#[derive(Debug, Default)]
pub enum RenderState {
    /// Nothing to show: no input yet, empty input, or a failed rebuild.
    #[default]
    Empty,
    /// A successfully built graph, owned until the next rebuild.
    Rendered(Graph),
}

impl RenderState {
    /// Checks whether there is no graph to show.
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderState::Empty)
    }

    /// Returns the current graph, if one is rendered.
    pub fn graph(&self) -> Option<&Graph> {
        match self {
            RenderState::Empty => None,
            RenderState::Rendered(graph) => Some(graph),
        }
    }
}

/// Owns a [`GraphBuilder`] and the current [`RenderState`], rebuilding the
/// graph from scratch on every input change.
#[derive(Default)]
pub struct Session {
    builder: GraphBuilder,
    state: RenderState,
}

impl Session {
    /// Create a session with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            builder: GraphBuilder::new(config),
            state: RenderState::default(),
        }
    }

    /// Rebuild the graph from the given source text.
    ///
    /// Transitions to [`RenderState::Rendered`] on a successful parse and
    /// build, and to [`RenderState::Empty`] on empty input, a parse
    /// failure, or a rejected build (node budget). Invalid input never
    /// invokes the layout engine.
    pub fn update(&mut self, source: &str) -> &RenderState {
        if source.trim().is_empty() {
            self.state = RenderState::Empty;
            return &self.state;
        }

        let rebuilt = self
            .builder
            .parse(source)
            .and_then(|value| self.builder.build(&value));

        self.state = match rebuilt {
            Ok(graph) => RenderState::Rendered(graph),
            Err(err) => {
                debug!(err:?; "Rebuild failed, presenting empty graph");
                RenderState::Empty
            }
        };

        &self.state
    }

    /// Returns the current render state.
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Returns the current graph, if one is rendered.
    pub fn graph(&self) -> Option<&Graph> {
        self.state.graph()
    }
}
