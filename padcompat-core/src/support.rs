//! Support-level classification and record provenance.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How well a game supports gamepad-style input.
///
/// Each variant is a distinct classification, not a point on a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportLevel {
    Unknown,
    /// No controller support
    None,
    /// Limited controller support
    Partial,
    /// Full native controller support
    Full,
    /// Community configurations available
    Community,
}

const ALL_LEVELS: &[SupportLevel] = &[
    SupportLevel::Unknown,
    SupportLevel::None,
    SupportLevel::Partial,
    SupportLevel::Full,
    SupportLevel::Community,
];

impl SupportLevel {
    /// All five levels in declaration order.
    pub fn all() -> &'static [SupportLevel] {
        ALL_LEVELS
    }

    /// Canonical name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::None => "None",
            Self::Partial => "Partial",
            Self::Full => "Full",
            Self::Community => "Community",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::None => "No support",
            Self::Partial => "Partial support",
            Self::Full => "Full support",
            Self::Community => "Community configs",
        }
    }

    /// Map a raw manual-override label to a level.
    ///
    /// Only `full`, `partial` and `none` are recognized (case-insensitive);
    /// anything else, including `community`, becomes `Unknown`.
    pub fn from_label_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "full" => Self::Full,
            "partial" => Self::Partial,
            "none" => Self::None,
            _ => Self::Unknown,
        }
    }

    /// Whether a game at this level can be played on a controller at all.
    pub fn is_controller_ready(&self) -> bool {
        matches!(self, Self::Full | Self::Partial)
    }
}

impl std::fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SupportLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_LEVELS
            .iter()
            .copied()
            .find(|level| level.as_str().to_lowercase() == lower)
            .ok_or_else(|| CoreError::unknown_level(s))
    }
}

/// Where a compatibility record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompatibilitySource {
    #[default]
    Unknown,
    /// From the game's developer or publisher
    Official,
    /// From a community database (reserved, no provider exists)
    Community,
    /// Set by hand
    User,
    /// Produced by the classifier
    AutoDetected,
}

impl CompatibilitySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Official => "Official",
            Self::Community => "Community",
            Self::User => "User",
            Self::AutoDetected => "AutoDetected",
        }
    }

    pub fn all() -> &'static [CompatibilitySource] {
        &[
            Self::Unknown,
            Self::Official,
            Self::Community,
            Self::User,
            Self::AutoDetected,
        ]
    }
}

impl std::fmt::Display for CompatibilitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CompatibilitySource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "official" => Ok(Self::Official),
            "community" => Ok(Self::Community),
            "user" => Ok(Self::User),
            "auto" | "autodetected" | "auto-detected" => Ok(Self::AutoDetected),
            _ => Err(CoreError::unknown_source(s)),
        }
    }
}

#[cfg(test)]
#[path = "tests/support_tests.rs"]
mod tests;
