use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use padcompat_lib::{Classifier, find_entry, load_catalog};

use super::colored_level;
use crate::error::CliError;

/// Print the verdict for every catalog entry, or just one.
///
/// Nothing is written to the database.
pub(crate) fn run_classify(catalog: &Path, game: Option<&str>, explain: bool) -> Result<(), CliError> {
    let entries = load_catalog(catalog)?;
    let selected = match game {
        Some(query) => vec![
            find_entry(&entries, query)
                .cloned()
                .ok_or_else(|| CliError::unknown_game(query))?,
        ],
        None => entries,
    };

    let classifier = Classifier::new();
    for entry in &selected {
        let result = classifier.explain(entry);
        log::info!(
            "{}: {}",
            entry.name.if_supports_color(Stdout, |t| t.bold()),
            colored_level(result.verdict),
        );
        if explain {
            for opinion in &result.opinions {
                if opinion.has_signal() {
                    log::info!(
                        "    {:<24} {:<18} {:.2}",
                        opinion.method,
                        opinion.level.label(),
                        opinion.confidence(),
                    );
                } else {
                    log::info!(
                        "    {:<24} {}",
                        opinion.method,
                        "no signal".if_supports_color(Stdout, |t| t.dimmed()),
                    );
                }
            }
        }
    }

    if selected.len() > 1 {
        crate::log_blank();
        log::info!("Classified {} entries", selected.len());
    }
    Ok(())
}
