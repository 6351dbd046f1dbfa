use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use padcompat_lib::{CompatibilitySource, CompatibilityStats, CompatibilityStore, SupportLevel};

use super::colored_level;
use crate::AppContext;

pub(crate) fn run_stats(ctx: &AppContext) {
    let store = CompatibilityStore::open(&ctx.db_path);
    let stats = CompatibilityStats::from_records(&store.all());

    log::info!(
        "{}",
        "Controller Compatibility".if_supports_color(Stdout, |t| t.bold())
    );
    crate::log_blank();
    for level in SupportLevel::all() {
        log::info!(
            "  {:<20} {:>5}  ({:.1}%)",
            colored_level(*level),
            stats.count(*level),
            stats.percent(*level),
        );
    }
    crate::log_blank();
    log::info!("  Total:            {:>5}", stats.total);
    log::info!(
        "  Controller ready: {:>5}  ({:.1}%)",
        stats.controller_ready(),
        stats.ready_percent(),
    );
    crate::log_blank();
    log::info!("{}", "By source".if_supports_color(Stdout, |t| t.bold()));
    for source in CompatibilitySource::all() {
        let count = stats.count_source(*source);
        if count > 0 {
            log::info!("  {:<18} {:>5}", source.as_str(), count);
        }
    }
}
