//! Convenient imports for working with datafix.
//!
//! ```
//! use datafix::prelude::*;
//! ```

pub use crate::codec::{JsonCodec, TreeCodec};
pub use crate::{Document, DynamicTree, Error, FixPipeline, Fixer, Migrator, Result,
    SchemaRegistry, SchemaVersionId};
