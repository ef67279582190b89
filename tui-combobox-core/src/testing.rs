//! Test utilities for combobox components
//!
//! - [`key`]: Create a `KeyEvent` from a string (e.g., `key("ctrl+n")`)
//! - [`click`]: Create a left mouse press at a position
//! - [`RenderHarness`]: Render a component into an in-memory terminal
//!
//! # Example
//!
//! ```ignore
//! use tui_combobox::testing::{key, RenderHarness};
//!
//! let mut render = RenderHarness::new(20, 3);
//! let output = render.render_to_string_plain(|frame| {
//!     view.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("Apple"));
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

use crate::event::EventKind;
use crate::keymap::parse_key_string;

/// Create a `KeyEvent` from a key string.
///
/// # Examples
///
/// ```
/// use tui_combobox_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("j");
/// assert_eq!(k.code, KeyCode::Char('j'));
///
/// let k = key("ctrl+n");
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Wrap a key string as an [`EventKind`].
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// Left mouse press at `(column, row)`.
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

/// Renders into a ratatui `TestBackend` and reads the result back.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with a terminal of the given size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Render one frame and return a copy of the buffer.
    pub fn render<F>(&mut self, f: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(f)
            .unwrap_or_else(|e| panic!("Failed to draw test frame: {e}"));
        self.terminal.backend().buffer().clone()
    }

    /// Render one frame and return its text, one line per row, without styles.
    pub fn render_to_string_plain<F>(&mut self, f: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let buffer = self.render(f);
        buffer_to_string_plain(&buffer)
    }
}

/// Buffer text without styles, trailing spaces trimmed per row.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
