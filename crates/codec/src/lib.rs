//! Encoding seam for the datafix framework
//!
//! The pipeline core is written only against [`DynamicTree`]; each concrete
//! document encoding implements [`TreeCodec`] once to supply the tree view
//! and the matching serializer. The core never touches storage itself.

#![warn(missing_docs)]

use datafix_core::{DynamicTree, Result};

pub mod json;

pub use json::{from_json, to_json, JsonCodec};

/// Capability interface implemented once per concrete document encoding.
pub trait TreeCodec {
    /// The encoding's native representation (e.g. `serde_json::Value`)
    type Repr;

    /// Build a tree view of a native value
    fn decode(&self, repr: Self::Repr) -> Result<DynamicTree>;

    /// Serialize a tree back into the native representation
    fn encode(&self, tree: &DynamicTree) -> Result<Self::Repr>;
}
