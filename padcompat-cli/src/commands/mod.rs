pub(crate) mod classify;
pub(crate) mod config;
pub(crate) mod detect;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod set;
pub(crate) mod show;
pub(crate) mod stats;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use padcompat_lib::{CatalogEntry, SupportLevel, find_entry, load_catalog};

use crate::error::CliError;

/// Support level label coloured by level.
pub(crate) fn colored_level(level: SupportLevel) -> String {
    let label = level.label();
    match level {
        SupportLevel::Full => label.if_supports_color(Stdout, |t| t.green()).to_string(),
        SupportLevel::Partial => label.if_supports_color(Stdout, |t| t.yellow()).to_string(),
        SupportLevel::None => label.if_supports_color(Stdout, |t| t.red()).to_string(),
        SupportLevel::Community => label.if_supports_color(Stdout, |t| t.cyan()).to_string(),
        SupportLevel::Unknown => label.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
    }
}

/// Load a catalog file and pick one entry by id or name.
pub(crate) fn load_one(catalog: &Path, query: &str) -> Result<CatalogEntry, CliError> {
    let entries = load_catalog(catalog)?;
    find_entry(&entries, query)
        .cloned()
        .ok_or_else(|| CliError::unknown_game(query))
}
