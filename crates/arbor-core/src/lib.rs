//! Arbor Core Types and Definitions
//!
//! This crate provides the foundational types for the Arbor tree layout
//! engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color validation with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Graph**: The laid-out node and edge model handed to renderers
//!   ([`graph`] module)

pub mod color;
pub mod geometry;
pub mod graph;
pub mod identifier;
