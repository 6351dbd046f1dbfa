use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use padcompat_lib::{CompatibilityStore, OverrideFile, Resolver};

use super::{colored_level, load_one};
use crate::AppContext;
use crate::error::CliError;

/// Resolve one entry (override, stored record, then auto-detect) and print it.
pub(crate) fn run_show(ctx: &AppContext, catalog: &Path, game: &str) -> Result<(), CliError> {
    let entry = load_one(catalog, game)?;
    let store = CompatibilityStore::open(&ctx.db_path);
    let overrides = OverrideFile::load(&ctx.overrides_path);

    let record = Resolver::new(&store, &overrides, ctx.settings.auto_detect).resolve(&entry);

    log::info!("{}", record.game_name.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Support:      {}", colored_level(record.support_level));
    log::info!("  Source:       {}", record.source);
    log::info!(
        "  Updated:      {}",
        record.last_updated.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(notes) = &record.notes {
        log::info!("  Notes:        {}", notes);
    }
    if !record.recommended_configurations.is_empty() {
        log::info!("  Configs:      {}", record.recommended_configurations.join(", "));
    }
    if record.total_ratings > 0 {
        log::info!(
            "  Rating:       {}/5 ({} ratings)",
            record.community_rating,
            record.total_ratings
        );
    }
    Ok(())
}
