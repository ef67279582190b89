//! tui-combobox: combobox items for ratatui apps
//!
//! Each item derives its selection from a container and asks the container
//! to change it. The container is a reducer store, so every change is an
//! action you can log or test.
//!
//! # Example
//! ```ignore
//! use std::rc::Rc;
//! use tui_combobox::prelude::*;
//!
//! let store = Rc::new(ComboboxStore::new(ComboboxConfig::from_json(r#"{"editable": true}"#)?));
//! let mut items: Vec<ComboboxItem<&str, _>> = ["apple", "banana", "cherry"]
//!     .into_iter()
//!     .map(|v| ComboboxItem::new(v).with_container(Rc::clone(&store)))
//!     .collect();
//! for item in &mut items {
//!     item.on_create()?;
//! }
//!
//! store.dispatch(ComboboxAction::SetSearch(Some("an".into())));
//! for item in &mut items {
//!     item.on_state_refresh()?;
//! }
//! ```

// Re-export everything from core
pub use tui_combobox_core::*;

pub use tui_combobox_components::{
    ComboboxItemList, ComboboxItemListProps, ComboboxItemView, ComboboxItemViewProps, ItemRow,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use tui_combobox_core::prelude::*;

    pub use tui_combobox_components::prelude::*;
}
