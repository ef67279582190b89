//! One combobox item rendered as a terminal row

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_combobox_core::{
    Component, ComboboxContainer, ComboboxItem, EventKind, ItemColor, ItemId, ItemState, Typo,
};

/// Props for ComboboxItemView component
pub struct ComboboxItemViewProps<'a, A> {
    /// Item being rendered
    pub id: ItemId,
    /// Text to show, usually the item's display string
    pub display: &'a str,
    /// Item flags
    pub state: ItemState,
    /// Text style from the container's density
    pub typo: Typo,
    /// Container accent color
    pub color: ItemColor,
    /// Whether the container draws a marker on the active row
    pub bordered: bool,
    /// Callback to create action when the item is clicked
    pub on_click: fn(ItemId) -> A,
}

impl<'a, A> ComboboxItemViewProps<'a, A> {
    /// Props for `item`, reading color and border from its container
    pub fn for_item<T, C>(
        item: &ComboboxItem<T, C>,
        display: &'a str,
        on_click: fn(ItemId) -> A,
    ) -> Self
    where
        C: ComboboxContainer<T>,
    {
        let container = item.container();
        Self {
            id: item.id(),
            display,
            state: item.state(),
            typo: item.typo(),
            color: container.map(|c| c.color()).unwrap_or_default(),
            bordered: container.is_some_and(|c| c.bordered()),
            on_click,
        }
    }
}

/// A single selectable row
///
/// Renders nothing while the item is not eligible. Emits `on_click` for a
/// left click on the row, or for enter/space while the item is active.
#[derive(Default)]
pub struct ComboboxItemView {
    /// Row drawn by the last render, for hit-testing
    area: Option<Rect>,
}

impl ComboboxItemView {
    /// Create a new ComboboxItemView
    pub fn new() -> Self {
        Self::default()
    }
}

/// Style for a row in the given state
pub(crate) fn item_style(state: ItemState, color: ItemColor) -> Style {
    if state.disabled {
        return Style::default().fg(Color::DarkGray);
    }

    match (state.active, state.selected) {
        (true, true) => Style::default()
            .add_modifier(Modifier::REVERSED)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().add_modifier(Modifier::REVERSED),
        (false, true) => Style::default()
            .fg(color.to_color())
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default(),
    }
}

/// Row content: gutter (or active marker) followed by the text
pub(crate) fn item_line<'a>(
    display: &'a str,
    state: ItemState,
    typo: Typo,
    bordered: bool,
) -> Line<'a> {
    let width = typo.gutter() as usize;
    let gutter = if bordered && state.active {
        format!("│{:width$}", "", width = width - 1)
    } else {
        " ".repeat(width)
    };
    Line::from(vec![Span::raw(gutter), Span::raw(display)])
}

impl<A> Component<A> for ComboboxItemView {
    type Props<'a> = ComboboxItemViewProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.state.eligible || props.state.disabled {
            return None;
        }

        let clicked = match event {
            EventKind::Key(key) => {
                props.state.active && matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
            }
            EventKind::Mouse(_) => match (event.left_click(), self.area) {
                (Some((column, row)), Some(area)) => {
                    column >= area.x
                        && column < area.x.saturating_add(area.width)
                        && row == area.y
                }
                _ => false,
            },
            EventKind::Resize(..) => false,
        };

        clicked.then(|| (props.on_click)(props.id))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if !props.state.eligible || area.height == 0 {
            self.area = None;
            return;
        }

        let row = Rect { height: 1, ..area };
        self.area = Some(row);

        let line = item_line(props.display, props.state, props.typo, props.bordered);
        let paragraph = Paragraph::new(line).style(item_style(props.state, props.color));
        frame.render_widget(paragraph, row);
    }
}
