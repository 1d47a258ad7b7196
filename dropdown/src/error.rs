//! Error types

/// Invalid dropdown configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The minimum selection count exceeds the maximum.
    #[error("Minimum selection count {min} exceeds maximum {max}")]
    LimitsInverted {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Errors surfaced by the fallible edges of the crate.
///
/// Core list operations never fail: malformed items degrade to
/// "no match" instead of producing an error.
#[derive(Debug, thiserror::Error)]
pub enum DropdownError {
    /// Configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Item list could not be parsed.
    #[error("Item parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
