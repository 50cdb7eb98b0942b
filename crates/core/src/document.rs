//! Versioned document wrapper
//!
//! A [`Document`] pairs a tree with the schema version its data conforms
//! to. The pipeline is the only component that produces documents with a
//! bumped version; everything else treats them as opaque values.

use crate::value::DynamicTree;
use serde::{Deserialize, Serialize};

/// Schema version tag carried by persisted documents.
pub type SchemaVersionId = u32;

/// A structured document tagged with the schema version it conforms to.
///
/// Value semantics throughout: migrating a document never touches the
/// input, it yields a new `Document` at the target version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Schema version the root tree currently conforms to
    pub version: SchemaVersionId,
    /// Root of the structured data
    pub root: DynamicTree,
}

impl Document {
    /// Create a document at a given schema version
    pub fn new(version: SchemaVersionId, root: DynamicTree) -> Self {
        Self { version, root }
    }

    /// Consume the document, returning its root tree
    pub fn into_root(self) -> DynamicTree {
        self.root
    }
}
