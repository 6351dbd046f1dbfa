//! Catalog files: lists of entries exported from a game library.

use std::path::Path;

use padcompat_core::CatalogEntry;

use crate::error::CatalogError;

/// Load every entry from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let is_yaml = match ext.as_str() {
        "yaml" | "yml" => true,
        "json" => false,
        _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
    };

    let contents = std::fs::read_to_string(path)?;
    let entries: Vec<CatalogEntry> = if is_yaml {
        serde_yml::from_str(&contents).map_err(|e| CatalogError::Yaml {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
    } else {
        serde_json::from_str(&contents).map_err(|e| CatalogError::Json {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
    };

    log::debug!("Loaded {} catalog entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Find an entry by exact id, then by case-insensitive name.
pub fn find_entry<'a>(entries: &'a [CatalogEntry], query: &str) -> Option<&'a CatalogEntry> {
    let lower = query.to_lowercase();
    entries
        .iter()
        .find(|e| e.id == query)
        .or_else(|| entries.iter().find(|e| e.name.to_lowercase() == lower))
}
