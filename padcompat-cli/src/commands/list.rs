use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use padcompat_lib::{CompatibilitySource, CompatibilityStore, SupportLevel};

use super::colored_level;
use crate::AppContext;

pub(crate) fn run_list(
    ctx: &AppContext,
    level: Option<SupportLevel>,
    source: Option<CompatibilitySource>,
) {
    let store = CompatibilityStore::open(&ctx.db_path);
    let mut records = match level {
        Some(level) => store.by_level(level),
        None => store.all(),
    };
    if let Some(source) = source {
        records.retain(|r| r.source == source);
    }
    records.sort_by_key(|r| r.game_name.to_lowercase());

    if records.is_empty() {
        log::info!("No records");
        return;
    }

    for record in &records {
        log::info!(
            "{:<40} {:<20} {}",
            record.game_name.if_supports_color(Stdout, |t| t.bold()),
            colored_level(record.support_level),
            record.source.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();
    log::info!("{} record(s)", records.len());
}
