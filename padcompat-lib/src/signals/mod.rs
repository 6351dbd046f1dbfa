//! Independent signal extractors.
//!
//! Each extractor inspects one facet of a [`CatalogEntry`] and returns a
//! [`DetectionOpinion`]. Extractors never fail: unreadable paths, missing
//! fields and malformed values all come back as `Unknown` at confidence 0.

use padcompat_core::{CatalogEntry, DetectionOpinion};

pub mod engine;
pub mod executable;
pub mod genre;
pub mod metadata;
pub mod platform;
pub mod publisher;
pub mod release;

pub use engine::detect_engine;
pub use executable::detect_executable;
pub use genre::detect_genre_and_tags;
pub use metadata::detect_metadata;
pub use platform::detect_platform;
pub use publisher::detect_publisher;
pub use release::detect_release_date;

/// Signature shared by every extractor.
pub type Extractor = fn(&CatalogEntry) -> DetectionOpinion;

pub const ENGINE_METHOD: &str = "Game Engine Analysis";
pub const EXECUTABLE_METHOD: &str = "Executable Analysis";
pub const METADATA_METHOD: &str = "Metadata Analysis";
pub const GENRE_METHOD: &str = "Genre & Tags Analysis";
pub const RELEASE_METHOD: &str = "Release Date Analysis";
pub const PLATFORM_METHOD: &str = "Platform Analysis";
pub const PUBLISHER_METHOD: &str = "Publisher Analysis";

/// The seven extractors in evaluation order.
///
/// Order only matters for tie-breaking in the combiner.
pub const ALL_EXTRACTORS: &[Extractor] = &[
    detect_engine,
    detect_executable,
    detect_metadata,
    detect_genre_and_tags,
    detect_release_date,
    detect_platform,
    detect_publisher,
];
