use padcompat_core::SupportLevel;

/// Progress update sent during batch detection.
///
/// Sent over an MPSC channel so a UI can follow along.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectProgress {
    /// Detection started
    Started {
        /// Number of entries that will be looked at
        total: usize,
    },

    /// An entry was classified and stored
    Classified { name: String, level: SupportLevel },

    /// An entry was left alone
    Skipped { name: String, reason: SkipReason },

    /// All entries handled
    Finished,
}

/// Why batch detection passed over an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Ignored,
    AlreadyClassified,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Ignored => write!(f, "ignored"),
            SkipReason::AlreadyClassified => write!(f, "already classified"),
        }
    }
}
