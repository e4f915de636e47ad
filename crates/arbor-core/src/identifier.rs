//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based approach.
//! Node identifiers are minted from a monotonic index ([`Id::from_index`]); edge
//! identifiers are derived from their endpoint ids ([`Id::between`]) so that no two
//! distinct parent/child pairs can collide.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient identifier type using string interning
///
/// This type provides efficient storage and comparison of string identifiers
/// through string interning. Two `Id`s created from the same string are equal
/// and share storage.
///
/// # Examples
///
/// ```
/// use arbor_core::identifier::Id;
///
/// // Node ids are minted from a counter in traversal order
/// let root = Id::from_index(0);
/// assert_eq!(root, "n0");
///
/// // Edge ids are derived from their endpoints
/// let child = Id::from_index(1);
/// let edge = Id::between(root, child);
/// assert_eq!(edge, "n0-n1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_core::identifier::Id;
    ///
    /// let id = Id::new("n7");
    /// assert_eq!(id, "n7");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates a node `Id` from a monotonic index.
    ///
    /// Indices are expected to be allocated in traversal order, so the string
    /// form (`n0`, `n1`, …) reflects the order nodes were emitted.
    pub fn from_index(idx: usize) -> Self {
        let name = format!("n{idx}");
        Self::new(&name)
    }

    /// Creates an edge `Id` derived from its source and target node ids.
    ///
    /// Since node ids are unique within one build, the combined form is unique
    /// per (source, target) pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_core::identifier::Id;
    ///
    /// let edge = Id::between(Id::from_index(2), Id::from_index(5));
    /// assert_eq!(edge, "n2-n5");
    /// ```
    pub fn between(source: Id, target: Id) -> Self {
        let combined = {
            let interner = interner().lock().expect("Failed to acquire interner lock");
            let source_str = interner
                .resolve(source.0)
                .expect("Source id should exist in interner");
            let target_str = interner
                .resolve(target.0)
                .expect("Target id should exist in interner");
            format!("{source_str}-{target_str}")
        };
        Self::new(&combined)
    }

    /// Returns the string form of this identifier.
    pub fn as_str(&self) -> String {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        interner
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{str_value}")
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    /// Serializes as the interned string, which is what renderers consume.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_str())
    }
}
