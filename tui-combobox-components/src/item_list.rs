//! Scrollable list of combobox items with keyboard navigation

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use tui_combobox_core::{
    next_navigable, Component, ComboboxContainer, ComboboxItem, EventKind, ItemColor, ItemState,
    NavCommand, NavKeymap, Typo,
};

use crate::item_view::{item_line, item_style};

/// One row of the list
#[derive(Debug, Clone, Copy)]
pub struct ItemRow<'a> {
    pub display: &'a str,
    pub state: ItemState,
    /// Whether keyboard navigation may land here
    pub navigable: bool,
}

impl<'a> ItemRow<'a> {
    pub fn for_item<T, C>(item: &ComboboxItem<T, C>, display: &'a str) -> Self
    where
        C: ComboboxContainer<T>,
    {
        Self {
            display,
            state: item.state(),
            navigable: item.is_navigable(),
        }
    }
}

/// Props for ComboboxItemList component
pub struct ComboboxItemListProps<'a, A> {
    /// Rows in container order, hidden ones included
    pub rows: &'a [ItemRow<'a>],
    /// Index of the active (highlighted) row
    pub active: Option<usize>,
    /// Whether this component has focus
    pub is_focused: bool,
    pub keymap: &'a NavKeymap,
    pub typo: Typo,
    pub color: ItemColor,
    pub bordered: bool,
    /// Callback when the active row moves
    pub on_activate: fn(usize) -> A,
    /// Callback when a row should toggle
    pub on_toggle: fn(usize) -> A,
    /// Callback when the list asks to close
    pub on_close: fn() -> A,
}

/// A scrollable list of combobox items
///
/// Ineligible rows are not drawn. Navigation skips rows that are hidden,
/// disabled or functional.
#[derive(Default)]
pub struct ComboboxItemList {
    /// Scroll offset into the visible rows
    scroll_offset: usize,
    /// Row indices drawn by the last render, top to bottom
    visible: Vec<usize>,
    /// Inner area of the last render
    inner: Option<Rect>,
}

impl ComboboxItemList {
    /// Create a new ComboboxItemList
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure the given visible position is inside the viewport
    fn ensure_visible(&mut self, position: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if position < self.scroll_offset {
            self.scroll_offset = position;
        } else if position >= self.scroll_offset + viewport_height {
            self.scroll_offset = position.saturating_sub(viewport_height - 1);
        }
    }

    /// Row index under a screen position, from the last render
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.inner?;
        if column < inner.x
            || column >= inner.x.saturating_add(inner.width)
            || row < inner.y
            || row >= inner.y.saturating_add(inner.height)
        {
            return None;
        }
        let position = self.scroll_offset + (row - inner.y) as usize;
        self.visible.get(position).copied()
    }
}

impl<A> Component<A> for ComboboxItemList {
    type Props<'a> = ComboboxItemListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.rows.is_empty() {
            return None;
        }

        let navigable = |i: usize| props.rows.get(i).is_some_and(|r| r.navigable);

        match event {
            EventKind::Key(key) => match props.keymap.command_for(key) {
                Some(NavCommand::Toggle) => props
                    .active
                    .filter(|&i| navigable(i))
                    .map(props.on_toggle),
                Some(NavCommand::Close) => Some((props.on_close)()),
                Some(movement) => {
                    let flags: Vec<bool> = props.rows.iter().map(|r| r.navigable).collect();
                    next_navigable(&flags, props.active, movement).map(props.on_activate)
                }
                None => None,
            },
            EventKind::Mouse(_) => event
                .left_click()
                .and_then(|(column, row)| self.row_at(column, row))
                .filter(|&i| navigable(i))
                .map(props.on_toggle),
            EventKind::Resize(..) => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let inner = block.inner(area);
        self.inner = Some(inner);

        self.visible = props
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.state.eligible)
            .map(|(i, _)| i)
            .collect();

        // A search may have shrunk the list below the old offset
        let viewport = inner.height as usize;
        self.scroll_offset = self
            .scroll_offset
            .min(self.visible.len().saturating_sub(viewport));

        let active_position = props
            .active
            .and_then(|a| self.visible.iter().position(|&i| i == a));
        if let Some(position) = active_position {
            self.ensure_visible(position, viewport);
        }

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|&i| {
                let row = props.rows[i];
                let state = ItemState {
                    active: props.active == Some(i),
                    ..row.state
                };
                ListItem::new(item_line(row.display, state, props.typo, props.bordered))
                    .style(item_style(state, props.color))
            })
            .collect();

        let list = List::new(items).block(block);

        let mut state = ListState::default().with_selected(active_position);
        *state.offset_mut() = self.scroll_offset;

        frame.render_stateful_widget(list, area, &mut state);
        self.scroll_offset = state.offset();
    }
}
