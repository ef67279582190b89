//! Error types for combobox items and containers

use thiserror::Error;

use crate::item::ItemId;

/// Errors surfaced by items and containers
#[derive(Debug, Error)]
pub enum ComboboxError {
    /// A converter could not turn a value into its display string
    #[error("Failed to convert value for display: {message}")]
    Conversion { message: String },

    /// The container has no registration for this item
    #[error("Item {0} is not registered with the container")]
    NotRegistered(ItemId),

    /// Configuration could not be parsed
    #[error("Invalid combobox configuration")]
    Config(#[source] serde_json::Error),
}

impl ComboboxError {
    /// Shorthand for a conversion failure
    pub fn conversion(message: impl Into<String>) -> Self {
        ComboboxError::Conversion {
            message: message.into(),
        }
    }

    /// Stable code for logging
    pub fn error_code(&self) -> &'static str {
        match self {
            ComboboxError::Conversion { .. } => "combobox.conversion_failed",
            ComboboxError::NotRegistered(_) => "combobox.not_registered",
            ComboboxError::Config(_) => "combobox.invalid_config",
        }
    }
}

/// Result alias used across the crate
pub type Result<T, E = ComboboxError> = std::result::Result<T, E>;
