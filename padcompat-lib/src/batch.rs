//! Batch auto-detection over a whole catalog.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use padcompat_core::{CatalogEntry, CompatibilityRecord, SupportLevel};

use crate::progress::{DetectProgress, SkipReason};
use crate::stats::CompatibilityStats;
use crate::store::CompatibilityStore;
use crate::worker_pool::WorkerPool;

#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Concurrent classifications
    pub workers: usize,
    /// Re-classify entries that already have a stored level
    pub force: bool,
    /// Entry ids or names to leave alone
    pub ignored: Vec<String>,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            workers: 4,
            force: false,
            ignored: Vec::new(),
        }
    }
}

impl DetectOptions {
    fn is_ignored(&self, entry: &CatalogEntry) -> bool {
        self.ignored
            .iter()
            .any(|g| *g == entry.id || g.eq_ignore_ascii_case(&entry.name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectSummary {
    pub classified: usize,
    pub skipped_ignored: usize,
    pub skipped_existing: usize,
    /// Verdicts of the classified entries
    pub levels: CompatibilityStats,
}

/// Auto-detect every entry in `entries` and store the verdicts.
///
/// Classification runs on the blocking thread pool, at most
/// `options.workers` at a time. Progress is reported on `progress_tx` if
/// given; a disconnected receiver is ignored.
pub async fn detect_all(
    store: Arc<CompatibilityStore>,
    entries: Vec<CatalogEntry>,
    options: &DetectOptions,
    progress_tx: Option<Sender<DetectProgress>>,
) -> DetectSummary {
    let send = |event: DetectProgress| {
        if let Some(tx) = &progress_tx {
            let _ = tx.send(event);
        }
    };
    send(DetectProgress::Started {
        total: entries.len(),
    });

    let mut summary = DetectSummary::default();
    let mut work = Vec::with_capacity(entries.len());
    for entry in entries {
        if options.is_ignored(&entry) {
            summary.skipped_ignored += 1;
            send(DetectProgress::Skipped {
                name: entry.name,
                reason: SkipReason::Ignored,
            });
        } else if !options.force && store.get(&entry).support_level != SupportLevel::Unknown {
            summary.skipped_existing += 1;
            send(DetectProgress::Skipped {
                name: entry.name,
                reason: SkipReason::AlreadyClassified,
            });
        } else {
            work.push(entry);
        }
    }

    let mut pool = WorkerPool::start(options.workers, work, move |entry: CatalogEntry| {
        let store = Arc::clone(&store);
        async move {
            let name = entry.name.clone();
            match tokio::task::spawn_blocking(move || store.auto_update(&entry)).await {
                Ok(record) => Some(record),
                Err(e) => {
                    log::error!("Classification of '{}' failed: {}", name, e);
                    None
                }
            }
        }
    });

    while let Some(result) = pool.recv().await {
        let Some(CompatibilityRecord {
            game_name,
            support_level,
            ..
        }) = result
        else {
            continue;
        };
        summary.classified += 1;
        summary.levels.add(support_level);
        send(DetectProgress::Classified {
            name: game_name,
            level: support_level,
        });
    }

    send(DetectProgress::Finished);
    summary
}

#[cfg(test)]
#[path = "tests/batch_tests.rs"]
mod tests;
