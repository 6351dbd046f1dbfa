//! Picks the support level to show for an entry.
//!
//! Manual overrides win, then stored records, then a fresh auto-detection
//! (when enabled).

use padcompat_core::{CatalogEntry, CompatibilityRecord, CompatibilitySource, SupportLevel};

use crate::overrides::OverrideFile;
use crate::store::CompatibilityStore;

pub struct Resolver<'a> {
    store: &'a CompatibilityStore,
    overrides: &'a OverrideFile,
    auto_detect: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a CompatibilityStore, overrides: &'a OverrideFile, auto_detect: bool) -> Self {
        Self {
            store,
            overrides,
            auto_detect,
        }
    }

    /// Resolve the record for `entry`.
    ///
    /// An override produces a `User` record without touching the store. A
    /// miss with auto-detect enabled classifies and stores the entry.
    /// Otherwise the result is an unstored `Unknown` record.
    pub fn resolve(&self, entry: &CatalogEntry) -> CompatibilityRecord {
        if let Some(level) = self.override_level(entry) {
            return CompatibilityRecord::for_entry(
                entry,
                level,
                CompatibilitySource::User,
                chrono::Utc::now(),
            );
        }

        let stored = self.store.get(entry);
        if stored.support_level != SupportLevel::Unknown {
            return stored;
        }

        if self.auto_detect {
            return self.store.auto_update(entry);
        }
        stored
    }

    /// Copy override labels into the store as `User` records.
    ///
    /// Only overrides whose id belongs to one of `entries` are written.
    /// Returns how many records were written.
    pub fn sync_overrides(&self, entries: &[CatalogEntry]) -> usize {
        let mut written = 0;
        for entry in entries {
            let Some(label) = self.overrides.get(&entry.id) else {
                continue;
            };
            let level = SupportLevel::from_label_loose(label);
            self.store.update(entry, level, CompatibilitySource::User);
            written += 1;
        }
        log::debug!("Synced {} override(s) into the store", written);
        written
    }

    fn override_level(&self, entry: &CatalogEntry) -> Option<SupportLevel> {
        let label = self.overrides.get(&entry.id)?;
        let level = SupportLevel::from_label_loose(label);
        if level == SupportLevel::Unknown {
            log::debug!("Ignoring unrecognized override '{}' for '{}'", label, entry.name);
            return None;
        }
        Some(level)
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
