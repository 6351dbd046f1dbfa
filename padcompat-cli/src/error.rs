use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog file could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] padcompat_lib::CatalogError),

    /// Compatibility database could not be read or written
    #[error("Database error: {0}")]
    Database(#[from] padcompat_lib::StoreError),

    /// Settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(#[from] padcompat_lib::SettingsError),

    /// Entry not present in the catalog
    #[error("No catalog entry matches '{0}'")]
    UnknownGame(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// CSV export error
    #[error("Export error: {0}")]
    Export(String),
}

impl CliError {
    pub(crate) fn unknown_game(query: impl Into<String>) -> Self {
        Self::UnknownGame(query.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}
