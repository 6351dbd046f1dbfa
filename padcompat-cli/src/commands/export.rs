use std::path::Path;

use padcompat_lib::CompatibilityStore;

use crate::AppContext;
use crate::error::CliError;

const HEADER: [&str; 8] = [
    "game_id",
    "game_name",
    "support_level",
    "source",
    "last_updated",
    "notes",
    "community_rating",
    "total_ratings",
];

/// Write every stored record to a CSV file.
pub(crate) fn run_export(ctx: &AppContext, output: &Path) -> Result<(), CliError> {
    let store = CompatibilityStore::open(&ctx.db_path);
    let records = store.all();

    let mut writer = csv::Writer::from_path(output).map_err(|e| CliError::export(e.to_string()))?;
    writer
        .write_record(HEADER)
        .map_err(|e| CliError::export(e.to_string()))?;
    for record in &records {
        let rating = record.community_rating.to_string();
        let total = record.total_ratings.to_string();
        let updated = record.last_updated.to_rfc3339();
        writer
            .write_record([
                record.game_id.as_str(),
                record.game_name.as_str(),
                record.support_level.as_str(),
                record.source.as_str(),
                updated.as_str(),
                record.notes.as_deref().unwrap_or_default(),
                rating.as_str(),
                total.as_str(),
            ])
            .map_err(|e| CliError::export(e.to_string()))?;
    }
    writer.flush()?;

    log::info!("Exported {} record(s) to {}", records.len(), output.display());
    Ok(())
}
