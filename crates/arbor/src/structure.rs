//! Graph structure produced by the layout engine.

mod graph;

pub use graph::Graph;
