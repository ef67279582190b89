//! Navigation keymap with string-based key parsing

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Commands an item list understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavCommand {
    Next,
    Prev,
    First,
    Last,
    Toggle,
    Close,
}

impl NavCommand {
    /// All commands in lookup order
    pub const ALL: [NavCommand; 6] = [
        NavCommand::Next,
        NavCommand::Prev,
        NavCommand::First,
        NavCommand::Last,
        NavCommand::Toggle,
        NavCommand::Close,
    ];

    /// Name used in config files
    pub fn name(self) -> &'static str {
        match self {
            NavCommand::Next => "next",
            NavCommand::Prev => "prev",
            NavCommand::First => "first",
            NavCommand::Last => "last",
            NavCommand::Toggle => "toggle",
            NavCommand::Close => "close",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Key strings bound to each navigation command
///
/// Deserializing merges the given commands onto the defaults, so a config
/// only has to list what it changes. Unknown command names are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavKeymap {
    bindings: HashMap<NavCommand, Vec<String>>,
    /// Parsed form of `bindings`; strings that fail to parse are left out
    parsed: HashMap<NavCommand, Vec<KeyEvent>>,
}

impl Default for NavKeymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(NavCommand::Next, ["down", "j", "ctrl+n"]);
        keymap.bind(NavCommand::Prev, ["up", "k", "ctrl+p"]);
        keymap.bind(NavCommand::First, ["home", "g"]);
        keymap.bind(NavCommand::Last, ["end", "G"]);
        keymap.bind(NavCommand::Toggle, ["enter", "space"]);
        keymap.bind(NavCommand::Close, ["esc"]);
        keymap
    }
}

impl NavKeymap {
    /// A keymap with no bindings at all
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
            parsed: HashMap::new(),
        }
    }

    /// Replace the keys bound to a command
    pub fn bind<I, S>(&mut self, command: NavCommand, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let parsed = keys
            .iter()
            .filter_map(|s| {
                let event = parse_key_string(s);
                if event.is_none() {
                    tracing::debug!(command = command.name(), key = %s, "Ignoring unparseable key");
                }
                event
            })
            .collect();
        self.parsed.insert(command, parsed);
        self.bindings.insert(command, keys);
    }

    pub fn keys(&self, command: NavCommand) -> &[String] {
        self.bindings.get(&command).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve a key event to a command
    pub fn command_for(&self, key: &KeyEvent) -> Option<NavCommand> {
        NavCommand::ALL.into_iter().find(|command| {
            self.parsed
                .get(command)
                .is_some_and(|bound| bound.iter().any(|b| key_matches(b, key)))
        })
    }
}

impl Serialize for NavKeymap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.bindings.len()))?;
        for command in NavCommand::ALL {
            if let Some(keys) = self.bindings.get(&command) {
                map.serialize_entry(command.name(), keys)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NavKeymap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, Vec<String>> = HashMap::deserialize(deserializer)?;

        let mut keymap = NavKeymap::default();
        for (name, keys) in raw {
            match NavCommand::from_name(&name) {
                Some(command) => keymap.bind(command, keys),
                None => tracing::debug!(command = %name, "Ignoring unknown keymap command"),
            }
        }
        Ok(keymap)
    }
}

fn without_shift(mut modifiers: KeyModifiers) -> KeyModifiers {
    modifiers.remove(KeyModifiers::SHIFT);
    modifiers
}

/// Compare code and modifiers, ignoring kind and state
///
/// Terminals report `G` as `Char('G')` with SHIFT set, so SHIFT is ignored for
/// character keys: the case of the character already carries it.
fn key_matches(bound: &KeyEvent, key: &KeyEvent) -> bool {
    match (bound.code, key.code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => {
            a == b && without_shift(bound.modifiers) == without_shift(key.modifiers)
        }
        (a, b) => a == b && bound.modifiers == key.modifiers,
    }
}

/// Parse a key string like "j", "G", "esc", "ctrl+n", "shift+tab"
///
/// Named keys and modifiers are case-insensitive. A single character keeps
/// its case, so "g" and "G" are different keys.
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim();
    if key_str.is_empty() {
        return None;
    }

    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        // A lone "+" is the plus key
        Some((mods, key)) if !key.is_empty() => (Some(mods), key),
        _ => (None, key_str),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts.into_iter().flat_map(|m| m.split('+')) {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let mut chars = key_part.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(ch), None) => KeyCode::Char(ch),
        _ => match key_part.to_lowercase().as_str() {
            "esc" | "escape" => KeyCode::Esc,
            "enter" | "return" => KeyCode::Enter,
            "space" => KeyCode::Char(' '),
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backtab" => {
                modifiers |= KeyModifiers::SHIFT;
                KeyCode::BackTab
            }
            "backspace" => KeyCode::Backspace,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "delete" => KeyCode::Delete,
            "insert" => KeyCode::Insert,
            other => {
                let n: u8 = other.strip_prefix('f')?.parse().ok()?;
                KeyCode::F(n)
            }
        },
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_keeps_character_case() {
        assert_eq!(parse_key_string("g").unwrap().code, KeyCode::Char('g'));
        assert_eq!(parse_key_string("G").unwrap().code, KeyCode::Char('G'));
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        let k = parse_key_string("Ctrl+N").unwrap();
        assert_eq!(k.code, KeyCode::Char('N'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));

        let k = parse_key_string("shift+tab").unwrap();
        assert_eq!(k.code, KeyCode::BackTab);

        assert_eq!(parse_key_string("SPACE").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("bogus").is_none());
    }

    #[test]
    fn test_default_commands() {
        let keymap = NavKeymap::default();

        assert_eq!(
            keymap.command_for(&press(KeyCode::Down, KeyModifiers::NONE)),
            Some(NavCommand::Next)
        );
        assert_eq!(
            keymap.command_for(&press(KeyCode::Char('g'), KeyModifiers::NONE)),
            Some(NavCommand::First)
        );
        assert_eq!(
            keymap.command_for(&press(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(NavCommand::Last)
        );
        assert_eq!(
            keymap.command_for(&press(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(NavCommand::Next)
        );
        assert_eq!(
            keymap.command_for(&press(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_deserialize_merges_onto_defaults() {
        let keymap: NavKeymap =
            serde_json::from_str(r#"{"next": ["tab"], "launch": ["l"]}"#).unwrap();

        assert_eq!(keymap.keys(NavCommand::Next), ["tab".to_string()]);
        assert_eq!(keymap.keys(NavCommand::Close), ["esc".to_string()]);
        assert_eq!(
            keymap.command_for(&press(KeyCode::Down, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_rebind_replaces_resolved_keys() {
        let mut keymap = NavKeymap::default();
        keymap.bind(NavCommand::Close, ["q", "not-a-key"]);

        // The raw strings are kept for serialization, bad ones never match
        assert_eq!(keymap.keys(NavCommand::Close).len(), 2);
        assert_eq!(
            keymap.command_for(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(NavCommand::Close)
        );
        assert_eq!(
            keymap.command_for(&press(KeyCode::Esc, KeyModifiers::NONE)),
            None
        );
    }
}
