use std::path::Path;

use padcompat_lib::{CompatibilitySource, CompatibilityStore, OverrideFile, SupportLevel};

use super::{colored_level, load_one};
use crate::AppContext;
use crate::error::CliError;

/// Record a manual support level in both the override file and the database.
pub(crate) fn run_set(
    ctx: &AppContext,
    catalog: &Path,
    game: &str,
    level: SupportLevel,
) -> Result<(), CliError> {
    let entry = load_one(catalog, game)?;

    // The override file only understands full/partial/none
    let mut overrides = OverrideFile::load(&ctx.overrides_path);
    if matches!(level, SupportLevel::Full | SupportLevel::Partial | SupportLevel::None) {
        overrides.set(entry.id.clone(), level.as_str())?;
    } else {
        overrides.remove(&entry.id)?;
    }

    let store = CompatibilityStore::open(&ctx.db_path);
    store.update(&entry, level, CompatibilitySource::User);
    store.try_save()?;

    log::info!("{} set to {}", entry.name, colored_level(level));
    Ok(())
}
