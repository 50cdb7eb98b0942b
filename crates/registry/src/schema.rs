//! SchemaRegistry: the ordered catalog of schema versions and their fixers
//!
//! Versions are kept in a `BTreeMap` keyed by id, so every traversal is in
//! ascending version order regardless of registration or hash iteration
//! order. Within one version, fixers run in registration order. Together
//! these give the stable, deterministic tie-break the pipeline needs when
//! multiple fixers touch overlapping fields.
//!
//! Misconfiguration (duplicate version id, fixer tagged with a different
//! version than its entry) fails fast at registration time, never at
//! migration time.

use crate::fixer::Fixer;
use datafix_core::{Error, Result, SchemaVersionId};
use std::collections::BTreeMap;
use std::ops::Bound;

/// One schema version entry: an id plus the fixers that bring a document
/// up to that version.
#[derive(Debug, Clone)]
pub struct SchemaVersion {
    id: SchemaVersionId,
    fixers: Vec<Fixer>,
}

impl SchemaVersion {
    /// The version id
    pub fn id(&self) -> SchemaVersionId {
        self.id
    }

    /// Fixers in registration order
    pub fn fixers(&self) -> &[Fixer] {
        &self.fixers
    }
}

/// Ordered registry of schema versions.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    versions: BTreeMap<SchemaVersionId, SchemaVersion>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema version with its full fixer set.
    ///
    /// Fails with [`Error::DuplicateVersion`] when the id is already
    /// present and with [`Error::FixerVersionMismatch`] when any fixer
    /// carries a different target version than the entry it is being
    /// registered under.
    pub fn register(&mut self, version: SchemaVersionId, fixers: Vec<Fixer>) -> Result<()> {
        if self.versions.contains_key(&version) {
            return Err(Error::DuplicateVersion { version });
        }
        for fixer in &fixers {
            if fixer.target_version() != version {
                return Err(Error::FixerVersionMismatch {
                    fixer: fixer.name().to_string(),
                    expected: version,
                    actual: fixer.target_version(),
                });
            }
        }
        self.versions.insert(version, SchemaVersion { id: version, fixers });
        Ok(())
    }

    /// Append one fixer to its target version, creating the entry if
    /// needed. Registration order within the version is preserved.
    pub fn add_fixer(&mut self, fixer: Fixer) {
        let version = fixer.target_version();
        self.versions
            .entry(version)
            .or_insert_with(|| SchemaVersion { id: version, fixers: Vec::new() })
            .fixers
            .push(fixer);
    }

    /// Every fixer with a target version in `(from, to]`, ordered by
    /// target version ascending, then registration order within a version.
    pub fn fixers_between(
        &self,
        from: SchemaVersionId,
        to: SchemaVersionId,
    ) -> Vec<&Fixer> {
        // BTreeMap::range panics on inverted bounds; an empty or inverted
        // interval is simply an empty fixer set.
        if from >= to {
            return Vec::new();
        }
        self.versions
            .range((Bound::Excluded(from), Bound::Included(to)))
            .flat_map(|(_, entry)| entry.fixers.iter())
            .collect()
    }

    /// The highest registered version id, if any
    pub fn latest_version(&self) -> Option<SchemaVersionId> {
        self.versions.keys().next_back().copied()
    }

    /// Check whether a version id is registered
    pub fn contains(&self, version: SchemaVersionId) -> bool {
        self.versions.contains_key(&version)
    }

    /// Number of registered versions
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// True when no versions are registered
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datafix_core::DynamicTree;

    fn noop_fixer(version: SchemaVersionId, name: &str) -> Fixer {
        Fixer::new(version, name, |_| false, |node| Ok(node.clone()))
    }

    fn names(fixers: &[&Fixer]) -> Vec<String> {
        fixers.iter().map(|f| f.name().to_string()).collect()
    }

    mod registration_tests {
        use super::*;

        #[test]
        fn register_accepts_distinct_versions() {
            let mut reg = SchemaRegistry::new();
            reg.register(1, vec![noop_fixer(1, "a")]).unwrap();
            reg.register(2, vec![noop_fixer(2, "b")]).unwrap();
            assert_eq!(reg.len(), 2);
        }

        #[test]
        fn duplicate_version_fails_fast() {
            let mut reg = SchemaRegistry::new();
            reg.register(1, vec![]).unwrap();

            let err = reg.register(1, vec![noop_fixer(1, "late")]).unwrap_err();
            assert_eq!(err, Error::DuplicateVersion { version: 1 });
            assert!(err.is_configuration());
        }

        #[test]
        fn mismatched_fixer_version_fails_fast() {
            let mut reg = SchemaRegistry::new();
            let err = reg.register(2, vec![noop_fixer(3, "wrong")]).unwrap_err();
            assert_eq!(
                err,
                Error::FixerVersionMismatch {
                    fixer: "wrong".into(),
                    expected: 2,
                    actual: 3,
                }
            );
        }

        #[test]
        fn add_fixer_creates_entry_on_demand() {
            let mut reg = SchemaRegistry::new();
            reg.add_fixer(noop_fixer(5, "first"));
            reg.add_fixer(noop_fixer(5, "second"));

            assert!(reg.contains(5));
            assert_eq!(names(&reg.fixers_between(0, 5)), vec!["first", "second"]);
        }
    }

    mod ordering_tests {
        use super::*;

        #[test]
        fn fixers_between_orders_by_version_then_registration() {
            // Register out of order on purpose: traversal must still be
            // version-ascending.
            let mut reg = SchemaRegistry::new();
            reg.register(3, vec![noop_fixer(3, "d")]).unwrap();
            reg.register(1, vec![noop_fixer(1, "a")]).unwrap();
            reg.register(2, vec![noop_fixer(2, "b"), noop_fixer(2, "c")]).unwrap();

            assert_eq!(names(&reg.fixers_between(1, 3)), vec!["b", "c", "d"]);
        }

        #[test]
        fn range_excludes_from_and_includes_to() {
            let mut reg = SchemaRegistry::new();
            for v in 1..=4 {
                reg.register(v, vec![noop_fixer(v, &format!("f{v}"))]).unwrap();
            }

            assert_eq!(names(&reg.fixers_between(2, 4)), vec!["f3", "f4"]);
            assert!(reg.fixers_between(4, 4).is_empty());
            assert!(reg.fixers_between(4, 2).is_empty());
        }

        #[test]
        fn inverted_and_empty_bounds_are_empty_not_panics() {
            let mut reg = SchemaRegistry::new();
            reg.register(1, vec![noop_fixer(1, "a")]).unwrap();
            reg.register(5, vec![noop_fixer(5, "b")]).unwrap();

            assert!(reg.fixers_between(5, 1).is_empty());
            assert!(reg.fixers_between(u32::MAX, 0).is_empty());
            assert!(reg.fixers_between(3, 3).is_empty());
            assert!(reg.fixers_between(0, 0).is_empty());
        }
    }

    mod query_tests {
        use super::*;

        #[test]
        fn latest_version_is_highest_id() {
            let mut reg = SchemaRegistry::new();
            assert_eq!(reg.latest_version(), None);

            reg.register(10, vec![]).unwrap();
            reg.register(3, vec![]).unwrap();
            assert_eq!(reg.latest_version(), Some(10));
        }

        #[test]
        fn empty_registry_queries() {
            let reg = SchemaRegistry::new();
            assert!(reg.is_empty());
            assert_eq!(reg.len(), 0);
            assert!(!reg.contains(1));
            assert!(reg.fixers_between(0, 100).is_empty());
        }

        #[test]
        fn registry_is_shareable_across_threads() {
            let mut reg = SchemaRegistry::new();
            reg.add_fixer(Fixer::new(
                1,
                "touch",
                |_| true,
                |node| Ok(node.set("seen", DynamicTree::Bool(true))),
            ));

            std::thread::scope(|s| {
                for _ in 0..4 {
                    s.spawn(|| {
                        let fixers = reg.fixers_between(0, 1);
                        assert_eq!(fixers.len(), 1);
                    });
                }
            });
        }
    }
}
