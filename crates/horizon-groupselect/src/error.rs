//! Error types for GroupSelect.

use crate::model::ItemId;

/// Result type alias for GroupSelect operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a multi-select.
///
/// All of them are configuration errors: once a widget exists, its
/// operations cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value references a group id that was never declared.
    #[error("No matching group {group} for value {value}")]
    NoMatchingGroup { value: ItemId, group: ItemId },

    /// JSON configuration could not be parsed.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration could not be parsed.
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a missing-group error.
    pub fn no_matching_group(value: impl Into<ItemId>, group: impl Into<ItemId>) -> Self {
        Self::NoMatchingGroup {
            value: value.into(),
            group: group.into(),
        }
    }
}
