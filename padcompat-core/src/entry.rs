//! Read-only view of one game in the host catalog.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A game as exposed by the host library.
///
/// The host owns and mutates its catalog; detection code only reads these
/// fields. Every list may be empty and every optional field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Host-assigned identifier (stable within one host database)
    pub id: String,

    /// Display name
    pub name: String,

    /// Identifier assigned by the library the game came from (store app id, etc.)
    #[serde(default)]
    pub origin_id: Option<String>,

    /// Name of the library the game came from (e.g. "Steam", "GOG")
    #[serde(default)]
    pub source_name: Option<String>,

    #[serde(default)]
    pub install_dir: Option<PathBuf>,

    /// Executables the host launches, in host order
    #[serde(default)]
    pub launch_targets: Vec<PathBuf>,

    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub platforms: Vec<String>,

    #[serde(default)]
    pub publishers: Vec<String>,

    /// Release date as `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, source_name: impl Into<String>, origin_id: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self.origin_id = Some(origin_id.into());
        self
    }

    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    pub fn with_launch_target(mut self, path: impl Into<PathBuf>) -> Self {
        self.launch_targets.push(path.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platforms.push(platform.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publishers.push(publisher.into());
        self
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Year component of the release date.
    ///
    /// Returns `None` when the date is missing or does not start with a
    /// four-digit year optionally followed by `-MM` and `-DD`.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?.trim();
        let mut parts = date.split('-');
        let year = parts.next()?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        for (part, max) in parts.zip([12u32, 31]) {
            let value: u32 = part.parse().ok()?;
            if part.len() != 2 || value == 0 || value > max {
                return None;
            }
        }
        if date.split('-').count() > 3 {
            return None;
        }
        year.parse().ok()
    }

    /// The library-specific identifier, if present and non-empty.
    pub fn origin_id(&self) -> Option<&str> {
        self.origin_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
