//! Container-level settings that items read

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Whether the container holds one value or a set of values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[default]
    Single,
    Multi,
}

/// How the container presents item text
///
/// `None` suppresses the text override: items show converter output only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuePresenter {
    None,
    #[default]
    Text,
    Chip,
    ItemContent,
}

/// Row density
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dense {
    #[default]
    Standard,
    Slim,
    Superslim,
}

impl Dense {
    /// Whether this density uses the compact text style
    pub fn is_compact(self) -> bool {
        matches!(self, Dense::Slim | Dense::Superslim)
    }
}

/// Text style of an item row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Typo {
    Body1,
    Body2,
}

impl Typo {
    /// Pick the text style for a container density
    ///
    /// Compact densities downgrade to `Body2`. Without a container the
    /// default `Body1` applies.
    pub fn for_dense(dense: Option<Dense>) -> Self {
        match dense {
            Some(d) if d.is_compact() => Typo::Body2,
            _ => Typo::Body1,
        }
    }

    /// Left gutter width in columns
    pub fn gutter(self) -> u16 {
        match self {
            Typo::Body1 => 2,
            Typo::Body2 => 1,
        }
    }
}

/// Accent color used for selected items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemColor {
    #[default]
    Default,
    Primary,
    Secondary,
    Info,
    Success,
    Warning,
    Error,
}

impl ItemColor {
    /// Terminal color for this accent
    pub fn to_color(self) -> Color {
        match self {
            ItemColor::Default => Color::White,
            ItemColor::Primary => Color::Cyan,
            ItemColor::Secondary => Color::Magenta,
            ItemColor::Info => Color::Blue,
            ItemColor::Success => Color::Green,
            ItemColor::Warning => Color::Yellow,
            ItemColor::Error => Color::Red,
        }
    }
}
