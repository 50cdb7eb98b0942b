//! Fixer: a single versioned, predicate-scoped document transformation
//!
//! ## Contract
//!
//! A fixer receives the whole document root; its own predicate and
//! navigation scope the change to the relevant subtree. When the predicate
//! rejects a node, `apply` is identity.
//!
//! The pipeline applies each fixer **at most once** per document per
//! version. Transforms must still be written so that re-running one whose
//! precondition no longer holds (e.g. text already patched) is a no-op;
//! the predicate is where that exclusion lives.
//!
//! Transforms are total over the predicate-accepted domain. A transform
//! that returns `Err` anyway has violated its contract and aborts the
//! whole migration as a [`FixerFailure`](datafix_core::Error::FixerFailure).

use datafix_core::{DynamicTree, Result, SchemaVersionId};
use std::fmt;
use std::sync::Arc;

/// Stored predicate: decides whether a fixer acts on a node.
pub type Predicate = Arc<dyn Fn(&DynamicTree) -> bool + Send + Sync>;

/// Stored transform: rewrites a predicate-accepted node.
pub type Transform = Arc<dyn Fn(&DynamicTree) -> Result<DynamicTree> + Send + Sync>;

/// A named, single-purpose transformation scoped by a predicate and tagged
/// with the schema version it targets.
///
/// Fixers own no data; predicate and transform are pure functions over
/// trees, which makes a registry of fixers freely shareable across threads.
///
/// # Examples
///
/// ```
/// use datafix_core::DynamicTree;
/// use datafix_registry::Fixer;
///
/// let fixer = Fixer::new(
///     2,
///     "uppercase-name",
///     |node| node.get_str("name").is_some(),
///     |node| {
///         let name = node.get_str("name").unwrap_or_default().to_uppercase();
///         Ok(node.set("name", DynamicTree::string(name)))
///     },
/// );
///
/// let doc = DynamicTree::map([("name", DynamicTree::string("anvil"))]);
/// let fixed = fixer.apply(&doc).unwrap();
/// assert_eq!(fixed.get_str("name"), Some("ANVIL"));
/// ```
#[derive(Clone)]
pub struct Fixer {
    name: String,
    target_version: SchemaVersionId,
    predicate: Predicate,
    transform: Transform,
}

impl Fixer {
    /// Create a fixer targeting `target_version`.
    pub fn new(
        target_version: SchemaVersionId,
        name: impl Into<String>,
        predicate: impl Fn(&DynamicTree) -> bool + Send + Sync + 'static,
        transform: impl Fn(&DynamicTree) -> Result<DynamicTree> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            target_version,
            predicate: Arc::new(predicate),
            transform: Arc::new(transform),
        }
    }

    /// The fixer's name, used in logs and failure reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Schema version a document conforms to after this fixer ran
    pub fn target_version(&self) -> SchemaVersionId {
        self.target_version
    }

    /// Apply this fixer to a node.
    ///
    /// Identity (an equal copy of the input) when the predicate rejects;
    /// otherwise the transform's output.
    pub fn apply(&self, node: &DynamicTree) -> Result<DynamicTree> {
        if !(self.predicate)(node) {
            return Ok(node.clone());
        }
        (self.transform)(node)
    }
}

impl fmt::Debug for Fixer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixer")
            .field("name", &self.name)
            .field("target_version", &self.target_version)
            .finish_non_exhaustive()
    }
}
