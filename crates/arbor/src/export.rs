//! Export functionality for Arbor graphs.
//!
//! This module provides the [`Exporter`] trait that defines the interface
//! for converting laid-out graphs into output formats. It is the final
//! stage in the Arbor processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! JSON Value
//!     ↓ layout
//! Positioned Graph
//!     ↓ export (this module)
//! Renderer Document
//! ```
//!
//! # Available Backends
//!
//! - [`json`] — the renderer's `{ "nodes": [...], "edges": [...] }` document
//!   via [`json::JsonExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering serialization failures and
//! I/O errors. [`Error`] converts into [`ArborError::Export`] at the crate
//! boundary.
//!
//! [`ArborError::Export`]: crate::ArborError::Export

/// JSON document export backend.
pub mod json;

use crate::structure::Graph;

/// Abstraction for graph export backends.
///
/// Implementors convert a laid-out [`Graph`] into a specific output format.
///
/// See the [`json`] module for the built-in JSON document implementation.
pub trait Exporter {
    /// Exports a laid-out graph to the backend's output format.
    ///
    /// # Arguments
    ///
    /// * `graph` - The positioned nodes and edges to export.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the graph cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_graph(&mut self, graph: &Graph) -> Result<(), Error>;
}

/// Errors that can occur during graph export.
///
/// This type is converted into [`ArborError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`ArborError::Export`]: crate::ArborError::Export
#[derive(Debug)]
pub enum Error {
    /// A serialization or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(err.to_string())
    }
}
