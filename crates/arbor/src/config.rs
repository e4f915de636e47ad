//! Configuration types for Arbor graph building.
//!
//! This module provides configuration structures that control how graphs
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spacing, leaf policy, and the optional node budget.
//! - [`StyleConfig`] - Fill color hints for container and leaf nodes.
//!
//! # Example
//!
//! ```
//! # use arbor::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().container_fill().is_ok());
//! ```

use serde::Deserialize;

use arbor_core::color::Color;

use crate::layout::{DEFAULT_LEVEL_SPACING, DEFAULT_NODE_SPACING, LeafPolicy};

/// Top-level application configuration combining layout and style settings.
///
/// Groups [`LayoutConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout configuration: spacing constants, leaf policy, and node budget.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Vertical distance between levels, in layout units.
    #[serde(default = "default_level_spacing")]
    level_spacing: f32,

    /// Base horizontal distance between nodes within one level.
    #[serde(default = "default_node_spacing")]
    node_spacing: f32,

    /// How primitive children become leaf nodes.
    #[serde(default)]
    leaf_policy: LeafPolicy,

    /// Maximum node count before a build is rejected as too large.
    /// Unset means unbounded.
    #[serde(default)]
    max_nodes: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            level_spacing: DEFAULT_LEVEL_SPACING,
            node_spacing: DEFAULT_NODE_SPACING,
            leaf_policy: LeafPolicy::default(),
            max_nodes: None,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified settings.
    pub fn new(
        level_spacing: f32,
        node_spacing: f32,
        leaf_policy: LeafPolicy,
        max_nodes: Option<usize>,
    ) -> Self {
        Self {
            level_spacing,
            node_spacing,
            leaf_policy,
            max_nodes,
        }
    }

    /// Returns the vertical distance between levels.
    pub fn level_spacing(&self) -> f32 {
        self.level_spacing
    }

    /// Returns the base horizontal distance between nodes within one level.
    pub fn node_spacing(&self) -> f32 {
        self.node_spacing
    }

    /// Returns the configured [`LeafPolicy`].
    pub fn leaf_policy(&self) -> LeafPolicy {
        self.leaf_policy
    }

    /// Returns the node budget, if one is configured.
    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }
}

/// Fill color hints for rendered nodes.
///
/// Fields that are not set fall back to the engine defaults (beige
/// containers, light blue leaves).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Fill color for container nodes, as a CSS color string.
    #[serde(default)]
    container_fill: Option<String>,

    /// Fill color for leaf nodes, as a CSS color string.
    #[serde(default)]
    leaf_fill: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified fill colors.
    pub fn new(container_fill: Option<String>, leaf_fill: Option<String>) -> Self {
        Self {
            container_fill,
            leaf_fill,
        }
    }

    /// Returns the parsed container fill [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn container_fill(&self) -> Result<Option<Color>, String> {
        self.container_fill
            .as_ref()
            .map(|fill| Color::new(fill))
            .transpose()
            .map_err(|err| format!("Invalid container fill in config: {err}"))
    }

    /// Returns the parsed leaf fill [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn leaf_fill(&self) -> Result<Option<Color>, String> {
        self.leaf_fill
            .as_ref()
            .map(|fill| Color::new(fill))
            .transpose()
            .map_err(|err| format!("Invalid leaf fill in config: {err}"))
    }
}

fn default_level_spacing() -> f32 {
    DEFAULT_LEVEL_SPACING
}

fn default_node_spacing() -> f32 {
    DEFAULT_NODE_SPACING
}
