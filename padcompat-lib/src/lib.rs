//! Gamepad compatibility detection and storage.
//!
//! Signal extractors look at a catalog entry's files and metadata, the
//! combiner turns their opinions into a verdict, and the store keeps the
//! verdicts on disk.

pub mod batch;
pub mod catalog;
pub mod classifier;
pub mod combiner;
pub mod error;
pub mod overrides;
pub mod progress;
pub mod resolver;
pub mod settings;
pub mod signals;
pub mod stats;
pub mod store;
pub mod worker_pool;

pub use batch::{DetectOptions, DetectSummary, detect_all};
pub use catalog::{find_entry, load_catalog};
pub use classifier::{Classification, Classifier, FixedClassifier, SupportClassifier};
pub use error::{CatalogError, SettingsError, StoreError};
pub use overrides::OverrideFile;
pub use progress::{DetectProgress, SkipReason};
pub use resolver::Resolver;
pub use settings::Settings;
pub use stats::CompatibilityStats;
pub use store::{CompatibilityStore, game_key};

// Re-export core types so frontends only need this crate
pub use padcompat_core::{
    CatalogEntry, CompatibilityRecord, CompatibilitySource, CoreError, DetectionOpinion,
    SupportLevel,
};
