//! Shared data model for gamepad compatibility detection.
//!
//! This crate has no I/O. It defines the catalog entry view handed over by a
//! host library, the support-level and provenance enums, the transient
//! per-extractor opinion, and the persisted compatibility record.

pub mod entry;
pub mod error;
pub mod opinion;
pub mod record;
pub mod support;
pub mod util;

pub use entry::CatalogEntry;
pub use error::CoreError;
pub use opinion::DetectionOpinion;
pub use record::CompatibilityRecord;
pub use support::{CompatibilitySource, SupportLevel};
