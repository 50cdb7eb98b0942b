//! FixPipeline: ordered application of fixers to a document
//!
//! ## Atomicity
//!
//! The input document is taken by shared reference and never written to.
//! Fixers thread a working copy of the root forward; any transform error
//! aborts the whole call with a
//! [`FixerFailure`](datafix_core::Error::FixerFailure) and the caller's
//! document is exactly what it was before the call. Tree immutability
//! makes this free.
//!
//! ## Concurrency
//!
//! Migration is synchronous and pure. Different documents may be migrated
//! concurrently through a shared registry; migrating the same document
//! instance concurrently is the caller's problem to serialize (exclusive
//! ownership during `migrate` is enough).

use datafix_core::{Document, Error, Result, SchemaVersionId};
use datafix_registry::SchemaRegistry;
use tracing::{debug, info};

/// Applies all applicable fixers, in version order, to bring a document
/// from its stored version to a target version.
#[derive(Debug, Clone, Copy)]
pub struct FixPipeline<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> FixPipeline<'r> {
    /// Create a pipeline over a registry
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// The registry this pipeline reads from
    pub fn registry(&self) -> &SchemaRegistry {
        self.registry
    }

    /// Migrate a document to the latest registered schema version.
    ///
    /// Documents already at or past the latest version (and documents fed
    /// through an empty registry) come back as an equal copy, version
    /// untouched.
    pub fn migrate(&self, document: &Document) -> Result<Document> {
        match self.registry.latest_version() {
            Some(latest) if latest > document.version => self.migrate_to(document, latest),
            _ => Ok(document.clone()),
        }
    }

    /// Migrate a document to a specific registered schema version.
    ///
    /// The target must be a registered version or the document's own
    /// version; anything else is [`Error::UnknownVersion`]. Targets at or
    /// below the document's version are a no-op copy.
    pub fn migrate_to(&self, document: &Document, target: SchemaVersionId) -> Result<Document> {
        if target == document.version {
            return Ok(document.clone());
        }
        if !self.registry.contains(target) {
            return Err(Error::UnknownVersion { version: target });
        }
        if target < document.version {
            return Ok(document.clone());
        }

        let fixers = self.registry.fixers_between(document.version, target);
        let mut root = document.root.clone();
        for fixer in &fixers {
            debug!(
                fixer = fixer.name(),
                target_version = fixer.target_version(),
                "applying fixer"
            );
            root = fixer.apply(&root).map_err(|cause| Error::FixerFailure {
                fixer: fixer.name().to_string(),
                cause: cause.to_string(),
            })?;
        }

        info!(
            from = document.version,
            to = target,
            fixers = fixers.len(),
            "migration complete"
        );
        Ok(Document::new(target, root))
    }
}
