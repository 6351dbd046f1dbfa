use thiserror::Error;

/// Errors raised when parsing core enums from user-supplied text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The text does not name a support level
    #[error("unknown support level: '{0}'")]
    UnknownSupportLevel(String),

    /// The text does not name a compatibility source
    #[error("unknown compatibility source: '{0}'")]
    UnknownSource(String),
}

impl CoreError {
    pub fn unknown_level(s: impl Into<String>) -> Self {
        Self::UnknownSupportLevel(s.into())
    }

    pub fn unknown_source(s: impl Into<String>) -> Self {
        Self::UnknownSource(s.into())
    }
}
