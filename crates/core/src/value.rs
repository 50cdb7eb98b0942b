//! DynamicTree: the format-agnostic structured value
//!
//! This module defines the canonical tree type every fixer operates on.
//! The enum has exactly 7 variants:
//!
//! 1. `Null` - absence of value
//! 2. `Bool` - boolean true or false
//! 3. `Int` - 64-bit signed integer
//! 4. `Float` - 64-bit IEEE-754 floating point
//! 5. `String` - UTF-8 encoded string
//! 6. `List` - ordered sequence of trees
//! 7. `Map` - string-keyed mapping of trees
//!
//! ## Navigation never fails
//!
//! Missing fields and wrong types are the common case in format-evolving
//! documents, so every lookup and every narrowing accessor returns an
//! `Option` instead of an error. Fixers can be written without any
//! defensive null/type boilerplate.
//!
//! ## Immutable rebuilding
//!
//! `set`, `remove` and `update` never mutate the receiver; each returns a
//! new tree. A document that fails mid-migration is therefore never left
//! half-rewritten.
//!
//! ## Equality rules
//!
//! - Different variants are never equal (no type coercion)
//! - `Int(1)` != `Float(1.0)`
//! - Float follows IEEE-754: `NaN != NaN`

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Format-agnostic structured value with optional-safe navigation.
///
/// Concrete encodings (JSON, binary tag trees, ...) decode into this type
/// before a migration runs and encode back out of it afterwards. The
/// pipeline core only ever sees `DynamicTree`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DynamicTree {
    /// Absence of value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// UTF-8 encoded string
    String(String),

    /// Ordered sequence of trees
    List(Vec<DynamicTree>),

    /// String-keyed mapping of trees (insertion order irrelevant)
    Map(HashMap<String, DynamicTree>),
}

impl DynamicTree {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a string node
    pub fn string(s: impl Into<String>) -> Self {
        DynamicTree::String(s.into())
    }

    /// Create an integer node
    pub fn int(i: i64) -> Self {
        DynamicTree::Int(i)
    }

    /// Create a float node
    pub fn float(f: f64) -> Self {
        DynamicTree::Float(f)
    }

    /// Create a boolean node
    pub fn bool(b: bool) -> Self {
        DynamicTree::Bool(b)
    }

    /// Create a list node from any iterator of trees
    pub fn list(items: impl IntoIterator<Item = DynamicTree>) -> Self {
        DynamicTree::List(items.into_iter().collect())
    }

    /// Create a map node from any iterator of key/tree pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use datafix_core::DynamicTree;
    ///
    /// let node = DynamicTree::map([("id", DynamicTree::int(7))]);
    /// assert_eq!(node.get("id").and_then(|v| v.as_int()), Some(7));
    /// ```
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, DynamicTree)>,
    {
        DynamicTree::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create an empty map node
    pub fn empty_map() -> Self {
        DynamicTree::Map(HashMap::new())
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Returns the variant name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            DynamicTree::Null => "Null",
            DynamicTree::Bool(_) => "Bool",
            DynamicTree::Int(_) => "Int",
            DynamicTree::Float(_) => "Float",
            DynamicTree::String(_) => "String",
            DynamicTree::List(_) => "List",
            DynamicTree::Map(_) => "Map",
        }
    }

    /// Check if this node is null
    pub fn is_null(&self) -> bool {
        matches!(self, DynamicTree::Null)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicTree::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DynamicTree::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DynamicTree::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicTree::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as list slice
    pub fn as_list(&self) -> Option<&[DynamicTree]> {
        match self {
            DynamicTree::List(l) => Some(l),
            _ => None,
        }
    }

    /// Try to get as map reference
    pub fn as_map(&self) -> Option<&HashMap<String, DynamicTree>> {
        match self {
            DynamicTree::Map(m) => Some(m),
            _ => None,
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Look up a key in a map node.
    ///
    /// Returns `None` when the receiver is not a map or the key is absent.
    /// Never fails, never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use datafix_core::DynamicTree;
    ///
    /// let node = DynamicTree::map([("name", DynamicTree::string("anvil"))]);
    /// assert_eq!(node.get("name").and_then(|v| v.as_str()), Some("anvil"));
    /// assert!(node.get("missing").is_none());
    /// assert!(DynamicTree::Int(3).get("name").is_none());
    /// ```
    pub fn get(&self, key: &str) -> Option<&DynamicTree> {
        match self {
            DynamicTree::Map(m) => m.get(key),
            _ => None,
        }
    }

    /// Chained string lookup, the most common fixer access pattern.
    ///
    /// Equivalent to `get(key).and_then(|v| v.as_str())`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    // ========================================================================
    // Immutable rebuilding
    // ========================================================================

    /// Return a new tree with `key` bound to `value` in a copy of the map.
    ///
    /// When the receiver is not a map the result is a fresh map containing
    /// only that binding. This lossy edge case is part of the compatibility
    /// contract and must not change.
    pub fn set(&self, key: impl Into<String>, value: DynamicTree) -> DynamicTree {
        let mut entries = match self {
            DynamicTree::Map(m) => m.clone(),
            _ => HashMap::new(),
        };
        entries.insert(key.into(), value);
        DynamicTree::Map(entries)
    }

    /// Return a new tree without `key`.
    ///
    /// Identity (a plain copy) when the receiver is not a map or the key
    /// is absent.
    pub fn remove(&self, key: &str) -> DynamicTree {
        match self {
            DynamicTree::Map(m) if m.contains_key(key) => {
                let mut entries = m.clone();
                entries.remove(key);
                DynamicTree::Map(entries)
            }
            other => other.clone(),
        }
    }

    /// Rebuild with `f` applied to the value at `key`, only when present.
    ///
    /// Absent key or non-map receiver is identity: no default subtree is
    /// ever fabricated. This is the guarded-rewrite primitive fixers use to
    /// leave documents without the target field untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use datafix_core::DynamicTree;
    ///
    /// let node = DynamicTree::map([("count", DynamicTree::int(1))]);
    /// let bumped = node.update("count", |v| {
    ///     DynamicTree::int(v.as_int().unwrap_or(0) + 1)
    /// });
    /// assert_eq!(bumped.get("count").and_then(|v| v.as_int()), Some(2));
    ///
    /// let missing = node.update("other", |_| DynamicTree::Null);
    /// assert_eq!(missing, node);
    /// ```
    pub fn update(&self, key: &str, f: impl FnOnce(&DynamicTree) -> DynamicTree) -> DynamicTree {
        match self.get(key) {
            Some(current) => self.set(key, f(current)),
            None => self.clone(),
        }
    }
}

impl Default for DynamicTree {
    fn default() -> Self {
        DynamicTree::Null
    }
}

impl From<&str> for DynamicTree {
    fn from(s: &str) -> Self {
        DynamicTree::String(s.to_string())
    }
}

impl From<String> for DynamicTree {
    fn from(s: String) -> Self {
        DynamicTree::String(s)
    }
}

impl From<i64> for DynamicTree {
    fn from(i: i64) -> Self {
        DynamicTree::Int(i)
    }
}

impl From<bool> for DynamicTree {
    fn from(b: bool) -> Self {
        DynamicTree::Bool(b)
    }
}

// ============================================================================
// Tests
// ============================================================================
