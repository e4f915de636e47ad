//! Error types for Arbor operations.
//!
//! This module provides the main error type [`ArborError`] which wraps
//! the error conditions that can occur while turning JSON text into a
//! laid-out graph document.

use std::io;

use thiserror::Error;

use crate::layout::LayoutError;

/// The main error type for Arbor operations.
///
/// The `Parse` variant carries the offending source text alongside the
/// underlying `serde_json` error, so callers can produce reports with
/// source snippets pointing at the failure position.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: serde_json::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ArborError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl ArborError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
