//! Core types for the datafix migration framework
//!
//! This crate defines the fundamental types used throughout the system:
//! - [`DynamicTree`]: format-agnostic structured value with optional-safe
//!   navigation and immutable rebuilding
//! - [`Document`]: a tree tagged with the schema version it conforms to
//! - [`Error`]: the unified error taxonomy

#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod value;

pub use document::{Document, SchemaVersionId};
pub use error::{Error, Result};
pub use value::DynamicTree;
