//! Fixer catalog for the datafix migration framework
//!
//! - [`Fixer`]: a named, versioned, predicate-scoped tree transformation
//! - [`SchemaRegistry`]: the ordered catalog of schema versions owning the
//!   fixers active at each version

#![warn(missing_docs)]

pub mod fixer;
pub mod schema;

pub use fixer::{Fixer, Predicate, Transform};
pub use schema::{SchemaRegistry, SchemaVersion};
