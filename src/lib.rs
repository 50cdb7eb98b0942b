//! # datafix
//!
//! Versioned data-fix pipeline for schemaless structured documents.
//!
//! Persisted documents carry an integer schema version. A catalog of
//! named, predicate-scoped fixers upgrades a document from its stored
//! version to the latest registered version, deterministically and with
//! no partial writes.
//!
//! ## Quick Start
//!
//! ```
//! use datafix::prelude::*;
//!
//! # fn main() -> datafix::Result<()> {
//! let mut migrator = Migrator::new();
//! migrator.register(2, vec![Fixer::new(
//!     2,
//!     "default-count",
//!     |root| root.get("count").is_none(),
//!     |root| Ok(root.set("count", DynamicTree::int(1))),
//! )])?;
//!
//! let stored = Document::new(1, DynamicTree::map([
//!     ("id", DynamicTree::string("minecraft:anvil")),
//! ]));
//!
//! let upgraded = migrator.migrate(&stored)?;
//! assert_eq!(upgraded.version, 2);
//! assert_eq!(upgraded.root.get("count").and_then(|v| v.as_int()), Some(1));
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! - [`DynamicTree`] - format-agnostic structured value, optional-safe
//!   navigation, immutable rebuilding
//! - [`Fixer`] - one versioned, predicate-scoped transformation
//! - [`SchemaRegistry`] - ordered catalog of versions and their fixers
//! - [`FixPipeline`] - ordered application from stored to target version
//! - [`Migrator`] - the narrow `register`/`migrate` facade over all of it
//!
//! Concrete encodings plug in through [`codec::TreeCodec`]; a JSON
//! implementation ships in [`codec`].

#![warn(missing_docs)]

mod migrator;

pub mod prelude;

/// Encoding seam: per-format tree codecs
pub mod codec {
    pub use datafix_codec::{from_json, to_json, JsonCodec, TreeCodec};
}

pub use datafix_core::{Document, DynamicTree, Error, Result, SchemaVersionId};
pub use datafix_engine::FixPipeline;
pub use datafix_registry::{Fixer, SchemaRegistry};
pub use migrator::Migrator;
