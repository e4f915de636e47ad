//! Color handling for Arbor style hints
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Arbor only needs colors for the presentational hints
//! attached to graph nodes, so the wrapper is limited to validation and
//! string conversion.

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Style hints travel to renderers as CSS color strings; this type exists so
/// configured colors are validated once, at configuration time, instead of
/// failing inside a renderer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "beige", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_core::color::Color;
    ///
    /// let container = Color::new("beige").unwrap();
    /// let leaf = Color::new("lightblue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let named = Color::new("beige");
        assert!(named.is_ok());

        let hex = Color::new("#add8e6");
        assert!(hex.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_display() {
        let color = Color::new("lightblue").unwrap();
        let display = format!("{color}");
        assert!(!display.is_empty());
    }

    #[test]
    fn test_color_eq() {
        let color1 = Color::new("beige").unwrap();
        let color2 = Color::new("beige").unwrap();
        let color3 = Color::new("lightblue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);
    }
}
