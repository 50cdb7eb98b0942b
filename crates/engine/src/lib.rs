//! Migration engine for the datafix framework
//!
//! [`FixPipeline`] selects every fixer between a document's stored version
//! and the target version and applies them in ascending version order.

#![warn(missing_docs)]

pub mod pipeline;

pub use pipeline::FixPipeline;
