//! Durable per-game compatibility records.
//!
//! The store keeps every record in memory behind a single lock and rewrites
//! the whole JSON file after each change. Load and save failures are logged
//! and never reach the caller; use [`read_records`] / [`CompatibilityStore::try_save`]
//! when the error matters.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use padcompat_core::util::normalize_name;
use padcompat_core::{CatalogEntry, CompatibilityRecord, CompatibilitySource, SupportLevel};

use crate::classifier::{Classifier, SupportClassifier};
use crate::error::StoreError;

type RecordMap = BTreeMap<String, CompatibilityRecord>;

/// Derive the storage key for an entry.
///
/// `"{source}_{originId}"` when the entry has an origin id, otherwise the
/// display name with spaces turned into underscores. Always lowercase.
pub fn game_key(entry: &CatalogEntry) -> String {
    match entry.origin_id() {
        Some(origin_id) => format!(
            "{}_{}",
            entry.source_name.as_deref().unwrap_or_default(),
            origin_id
        )
        .to_lowercase(),
        None => entry.name.to_lowercase().replace(' ', "_"),
    }
}

/// Read a database file. A missing file is an empty database.
pub fn read_records(path: &Path) -> Result<RecordMap, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(RecordMap::new()),
        Err(e) => return Err(StoreError::io(path, e)),
    };
    serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a database file atomically, creating its directory if needed.
pub fn write_records(path: &Path, records: &RecordMap) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    let serialized = serde_json::to_string_pretty(records)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serialized).map_err(|e| StoreError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

/// The compatibility database.
pub struct CompatibilityStore {
    path: PathBuf,
    records: Mutex<RecordMap>,
    classifier: Box<dyn SupportClassifier>,
}

impl CompatibilityStore {
    /// Open the database at `path` with the heuristic [`Classifier`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_classifier(path, Box::new(Classifier::new()))
    }

    /// Open the database at `path`, using `classifier` for auto-updates.
    pub fn with_classifier(path: impl Into<PathBuf>, classifier: Box<dyn SupportClassifier>) -> Self {
        let path = path.into();
        let records = load_or_empty(&path);
        Self {
            path,
            records: Mutex::new(records),
            classifier,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up an entry's record.
    ///
    /// Tries the derived key, then an exact normalized-name match, then a
    /// normalized-name substring match in either direction. The first
    /// record in key order wins each stage. With no match, returns an
    /// `Unknown` record that is not stored.
    pub fn get(&self, entry: &CatalogEntry) -> CompatibilityRecord {
        self.lookup_stored(entry)
            .unwrap_or_else(|| CompatibilityRecord::unknown(entry))
    }

    /// Like [`get`](Self::get), but `None` instead of a placeholder.
    pub fn lookup_stored(&self, entry: &CatalogEntry) -> Option<CompatibilityRecord> {
        let records = self.lock();
        if let Some(record) = records.get(&game_key(entry)) {
            return Some(record.clone());
        }

        let wanted = normalize_name(&entry.name);
        if wanted.is_empty() {
            return None;
        }
        let names: Vec<(String, &CompatibilityRecord)> = records
            .values()
            .map(|r| (normalize_name(&r.game_name), r))
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let found = names
            .iter()
            .find(|(name, _)| *name == wanted)
            .or_else(|| {
                names
                    .iter()
                    .find(|(name, _)| name.contains(&wanted) || wanted.contains(name.as_str()))
            });
        if let Some((_, record)) = found {
            log::debug!(
                "'{}' matched stored record '{}' by name",
                entry.name,
                record.game_name
            );
        }
        found.map(|(_, record)| (*record).clone())
    }

    /// Replace the entry's record and persist the database.
    ///
    /// Notes, configurations and ratings of any previous record are not
    /// carried over. The in-memory record stays updated even if the file
    /// write fails.
    pub fn update(
        &self,
        entry: &CatalogEntry,
        level: SupportLevel,
        source: CompatibilitySource,
    ) -> CompatibilityRecord {
        let key = game_key(entry);
        let mut records = self.lock();

        let mut now = Utc::now();
        if let Some(previous) = records.get(&key) {
            now = now.max(previous.last_updated);
        }
        let record = CompatibilityRecord::for_entry(entry, level, source, now);
        records.insert(key, record.clone());

        self.persist(&records);
        record
    }

    /// Classify the entry and store the verdict as auto-detected.
    pub fn auto_update(&self, entry: &CatalogEntry) -> CompatibilityRecord {
        let level = self.classifier.classify(entry);
        log::debug!("Auto-detected '{}' as {}", entry.name, level);
        self.update(entry, level, CompatibilitySource::AutoDetected)
    }

    /// Snapshot of every record, in key order.
    pub fn all(&self) -> Vec<CompatibilityRecord> {
        self.lock().values().cloned().collect()
    }

    /// Snapshot of the records at one support level.
    pub fn by_level(&self, level: SupportLevel) -> Vec<CompatibilityRecord> {
        self.lock()
            .values()
            .filter(|r| r.support_level == level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discard in-memory state and re-read the file.
    pub fn reload(&self) {
        let fresh = load_or_empty(&self.path);
        *self.lock() = fresh;
    }

    /// Write the database, logging any failure.
    pub fn save(&self) {
        let records = self.lock();
        self.persist(&records);
    }

    /// Write the database, returning any failure.
    pub fn try_save(&self) -> Result<(), StoreError> {
        let records = self.lock();
        write_records(&self.path, &records)
    }

    fn persist(&self, records: &RecordMap) {
        if let Err(e) = write_records(&self.path, records) {
            log::error!("Failed to save compatibility database: {}", e);
        }
    }

    fn lock(&self) -> MutexGuard<'_, RecordMap> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn load_or_empty(path: &Path) -> RecordMap {
    match read_records(path) {
        Ok(records) => {
            log::debug!(
                "Loaded {} compatibility records from {}",
                records.len(),
                path.display()
            );
            records
        }
        Err(e) => {
            log::error!("Failed to load compatibility database: {}", e);
            RecordMap::new()
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
