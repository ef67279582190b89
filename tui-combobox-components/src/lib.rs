//! ratatui components for tui-combobox
//!
//! Components implement the `Component<A>` trait and emit actions via
//! callback functions passed through Props. The host forwards those actions
//! to the item (`handle_click`, `set_active`) or to the container.
//!
//! # Components
//!
//! - [`ComboboxItemView`] - One item row with click and enter/space handling
//! - [`ComboboxItemList`] - Item rows with keyboard navigation and scrolling
//!
//! # Example
//!
//! ```ignore
//! use tui_combobox_components::{ComboboxItemList, ComboboxItemListProps, ItemRow};
//!
//! let displays: Vec<String> = items.iter().map(|i| i.display_string()).collect::<Result<_>>()?;
//! let rows: Vec<ItemRow> = items
//!     .iter()
//!     .zip(&displays)
//!     .map(|(item, display)| ItemRow::for_item(item, display))
//!     .collect();
//!
//! list.render(frame, area, ComboboxItemListProps {
//!     rows: &rows,
//!     active: state.active,
//!     is_focused: true,
//!     keymap: store.keymap(),
//!     typo: Typo::Body1,
//!     color: ItemColor::Primary,
//!     bordered: false,
//!     on_activate: Action::Activate,
//!     on_toggle: Action::Toggle,
//!     on_close: || Action::Close,
//! });
//! ```

mod item_list;
mod item_view;

pub use item_list::{ComboboxItemList, ComboboxItemListProps, ItemRow};
pub use item_view::{ComboboxItemView, ComboboxItemViewProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ComboboxItemList, ComboboxItemListProps, ComboboxItemView, ComboboxItemViewProps, ItemRow,
    };
}
