//! Migrator: the narrow public surface over registry and pipeline
//!
//! External catalogs bootstrap concrete (version, predicate, transform)
//! triples through `register`/`add_fixer`; after that, `migrate` is the
//! only operation callers need.

use datafix_core::{Document, Result, SchemaVersionId};
use datafix_engine::FixPipeline;
use datafix_registry::{Fixer, SchemaRegistry};

/// Owns a [`SchemaRegistry`] and migrates documents through it.
///
/// Registration happens up front (`&mut self`); migration is read-only,
/// so a populated `Migrator` can be shared across threads to migrate
/// different documents concurrently.
#[derive(Debug, Default)]
pub struct Migrator {
    registry: SchemaRegistry,
}

impl Migrator {
    /// Create a migrator with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema version with its full fixer set.
    ///
    /// Fails fast on duplicate version ids or mismatched fixer tags.
    pub fn register(&mut self, version: SchemaVersionId, fixers: Vec<Fixer>) -> Result<()> {
        self.registry.register(version, fixers)
    }

    /// Append one fixer under its own target version
    pub fn add_fixer(&mut self, fixer: Fixer) {
        self.registry.add_fixer(fixer);
    }

    /// Migrate a document to the latest registered schema version
    pub fn migrate(&self, document: &Document) -> Result<Document> {
        FixPipeline::new(&self.registry).migrate(document)
    }

    /// Migrate a document to a specific registered schema version
    pub fn migrate_to(&self, document: &Document, target: SchemaVersionId) -> Result<Document> {
        FixPipeline::new(&self.registry).migrate_to(document, target)
    }

    /// The highest registered version, if any
    pub fn latest_version(&self) -> Option<SchemaVersionId> {
        self.registry.latest_version()
    }

    /// Read access to the underlying registry
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }
}
