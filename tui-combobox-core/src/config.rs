//! Container configuration

use serde::{Deserialize, Serialize};

use crate::error::{ComboboxError, Result};
use crate::keymap::NavKeymap;
use crate::options::{Dense, ItemColor, SelectionMode, ValuePresenter};

/// Settings a container is created with
///
/// Every field has a default, so configs only list what they change:
///
/// ```
/// use tui_combobox_core::config::ComboboxConfig;
/// use tui_combobox_core::options::{Dense, SelectionMode};
///
/// let config = ComboboxConfig::from_json(r#"{"selection_mode": "multi", "dense": "slim"}"#).unwrap();
/// assert_eq!(config.selection_mode, SelectionMode::Multi);
/// assert_eq!(config.dense, Dense::Slim);
/// assert!(!config.editable);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
    pub selection_mode: SelectionMode,
    /// Accept typed search input
    pub editable: bool,
    pub presenter: ValuePresenter,
    pub dense: Dense,
    pub color: ItemColor,
    pub bordered: bool,
    pub keymap: NavKeymap,
}

impl ComboboxConfig {
    /// Parse a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ComboboxError::Config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ComboboxError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::NavCommand;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(ComboboxConfig::from_json("{}").unwrap(), ComboboxConfig::default());
    }

    #[test]
    fn test_keymap_overrides() {
        let config =
            ComboboxConfig::from_json(r#"{"editable": true, "keymap": {"close": ["q"]}}"#).unwrap();

        assert!(config.editable);
        assert_eq!(config.keymap.keys(NavCommand::Close), ["q".to_string()]);
        assert_eq!(config.keymap.keys(NavCommand::Toggle).len(), 2);
    }

    #[test]
    fn test_invalid_config() {
        let err = ComboboxConfig::from_json(r#"{"dense": "roomy"}"#).unwrap_err();
        assert_eq!(err.error_code(), "combobox.invalid_config");
    }

    #[test]
    fn test_json_roundtrip_preserves_keymap() {
        let mut config = ComboboxConfig::default();
        config.keymap.bind(NavCommand::Next, ["tab"]);
        let parsed = ComboboxConfig::from_json(&config.to_json().unwrap()).unwrap();

        assert_eq!(parsed, config);
    }
}
