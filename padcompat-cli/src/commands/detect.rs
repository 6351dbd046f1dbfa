use std::path::Path;
use std::sync::{Arc, mpsc};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use padcompat_lib::{
    CompatibilityStore, DetectOptions, DetectProgress, SupportLevel, detect_all, load_catalog,
};

use super::colored_level;
use crate::AppContext;
use crate::error::CliError;

/// Auto-detect every catalog entry into the database.
pub(crate) fn run_detect(
    ctx: &AppContext,
    catalog: &Path,
    force: bool,
    workers: Option<usize>,
) -> Result<(), CliError> {
    let entries = load_catalog(catalog)?;
    let workers = workers.unwrap_or(ctx.settings.workers);
    if !(1..=64).contains(&workers) {
        return Err(CliError::config(format!(
            "workers must be between 1 and 64 (got {workers})"
        )));
    }

    let options = DetectOptions {
        workers,
        force,
        ignored: ctx.settings.ignored_games.clone(),
    };
    let store = Arc::new(CompatibilityStore::open(&ctx.db_path));

    let pb = if ctx.quiet {
        ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden())
    } else {
        ProgressBar::new(entries.len() as u64)
    };
    pb.set_style(
        ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
            .map_err(|e| CliError::runtime(e.to_string()))?,
    );

    let (tx, rx) = mpsc::channel();
    let progress_pb = pb.clone();
    let progress_thread = std::thread::spawn(move || {
        for event in rx {
            match event {
                DetectProgress::Started { total } => progress_pb.set_length(total as u64),
                DetectProgress::Classified { name, .. } => {
                    progress_pb.set_message(name);
                    progress_pb.inc(1);
                }
                DetectProgress::Skipped { name, reason } => {
                    log::debug!("Skipped '{}' ({})", name, reason);
                    progress_pb.inc(1);
                }
                DetectProgress::Finished => progress_pb.finish_and_clear(),
            }
        }
    });

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;
    let summary = rt.block_on(detect_all(store.clone(), entries, &options, Some(tx)));
    join_progress(progress_thread);

    log::info!(
        "{} {} classified, {} ignored, {} already classified",
        "Detection complete:".if_supports_color(Stdout, |t| t.bold()),
        summary.classified,
        summary.skipped_ignored,
        summary.skipped_existing,
    );
    for level in SupportLevel::all() {
        let count = summary.levels.count(*level);
        if count > 0 {
            log::info!("  {:<20} {}", colored_level(*level), count);
        }
    }
    log::info!(
        "Database: {}",
        store.path().display().if_supports_color(Stdout, |t| t.cyan())
    );
    Ok(())
}

/// Wait for the progress display to drain. Returns false if it panicked.
fn join_progress(handle: std::thread::JoinHandle<()>) -> bool {
    match handle.join() {
        Ok(()) => true,
        Err(_) => {
            log::error!("Progress display thread panicked; detection results were still saved");
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/detect_tests.rs"]
mod tests;
